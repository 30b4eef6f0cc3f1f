pub use owo_colors::{OwoColorize, Stream};

/// Prints every argument to STDOUT under a single lock, then flushes.
#[macro_export]
macro_rules! show {
    ($($expression:expr),+ $(,)?) => {{
        let mut stdout = ::std::io::stdout().lock();
        $(
            ::std::io::Write::write_fmt(&mut stdout, ::std::format_args!("{}", $expression))
                .expect("Failed to write to STDOUT");
        )+
        ::std::io::Write::flush(&mut stdout).expect("Failed to flush STDOUT");
    }};
}

#[macro_export]
macro_rules! showln {
    ($($expression:expr),+ $(,)?) => {
        $crate::show!($($expression,)+ "\n")
    };
}

/// Diagnostics for `--verbose`, kept off STDOUT so the report stays clean.
#[macro_export]
macro_rules! noteln {
    ($($arg:tt)*) => {
        ::std::eprintln!(
            "{}",
            $crate::colors::OwoColorize::if_supports_color(
                &::std::format!($($arg)*),
                $crate::colors::Stream::Stderr,
                |text| $crate::colors::OwoColorize::dimmed(text),
            ),
        );
    };
}
