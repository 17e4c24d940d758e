// src/gui/router.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Config,
    Categories,
    Locations,
    Execution,
}

pub static TABS: &[Tab] = &[Tab::Config, Tab::Categories, Tab::Locations, Tab::Execution];

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Config => "Configuration",
            Tab::Categories => "Categories",
            Tab::Locations => "Locations",
            Tab::Execution => "Execution",
        }
    }
}

pub fn all_tabs() -> &'static [Tab] {
    TABS
}

/// Out-of-range indices land on the first tab.
pub fn tab_at(index: usize) -> Tab {
    TABS.get(index).copied().unwrap_or(Tab::Config)
}
