// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Report a line to the user-facing progress sink AND the debug log.
///
/// `say!(progress, "Job {} created", id)` where `progress: &mut dyn Progress`.
#[macro_export]
macro_rules! say {
    ($progress:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::log::write_log("INFO", &msg);
        $crate::progress::Progress::log(&mut *$progress, &msg);
    }};
}
