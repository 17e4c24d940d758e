// src/gui/model.rs
//
// Checkbox lists behind the Categories and Locations tabs. Panels render from
// here every frame and write clicks back; nothing else holds selection state.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckItem<T> {
    pub item: T,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckList<T> {
    items: Vec<CheckItem<T>>,
}

impl<T> Default for CheckList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> CheckList<T> {
    pub fn new(items: Vec<T>, checked: bool) -> Self {
        Self { items: items.into_iter().map(|item| CheckItem { item, checked }).collect() }
    }

    /// Replace the items, carrying over the checked state of those whose
    /// `key` was already present. Newcomers start unchecked.
    pub fn rebuild_with<K, F>(&mut self, items: Vec<T>, key: F)
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let was_checked: Vec<K> = self.items.iter().filter(|c| c.checked).map(|c| key(&c.item)).collect();
        self.items = items
            .into_iter()
            .map(|item| {
                let checked = was_checked.contains(&key(&item));
                CheckItem { item, checked }
            })
            .collect();
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &CheckItem<T>> {
        self.items.iter()
    }

    pub fn get(&self, ix: usize) -> Option<&T> {
        self.items.get(ix).map(|c| &c.item)
    }

    pub fn is_checked(&self, ix: usize) -> bool {
        self.items.get(ix).is_some_and(|c| c.checked)
    }

    /// Out of range is a no-op.
    pub fn set(&mut self, ix: usize, checked: bool) {
        if let Some(c) = self.items.get_mut(ix) {
            c.checked = checked;
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        self.items.iter_mut().for_each(|c| c.checked = checked);
    }

    /// 0-based, in list order.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.items.iter().enumerate().filter(|(_, c)| c.checked).map(|(i, _)| i).collect()
    }

    pub fn checked_items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|c| c.checked).map(|c| &c.item)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|c| c.checked).count()
    }
}
