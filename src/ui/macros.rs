/// One status line: a right-aligned coloured category, then the message.
#[doc(hidden)]
#[macro_export]
macro_rules! blog_line {
    ($colour:ident, $category:expr, $($arg:tt)*) => {{
        use termion::color;
        let formatted_args = format!($($arg)*);
        println!("{}{:>12}{} {}",
            color::Fg(color::$colour),
            $category,
            color::Fg(color::Reset),
            formatted_args
        );
    }};
}

#[macro_export]
macro_rules! blog {
    ($category:expr, $($arg:tt)*) => {
        $crate::blog_line!(Green, $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! blog_warning {
    ($category:expr, $($arg:tt)*) => {
        $crate::blog_line!(Yellow, $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! blog_working {
    ($category:expr, $($arg:tt)*) => {
        $crate::blog_line!(Blue, $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! blog_done {
    ($category:expr, $($arg:tt)*) => {
        $crate::blog_line!(LightGreen, $category, $($arg)*)
    };
}

pub use blog;
pub use blog_done;
pub use blog_warning;
pub use blog_working;
