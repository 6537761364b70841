// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}

/// Owned puzzle lines from literals: `lines!["467..114..", "...*......"]`.
#[macro_export]
macro_rules! lines {
    ($($line:expr),* $(,)?) => {
        ::std::vec![$(::std::string::String::from($line)),*]
    };
}
