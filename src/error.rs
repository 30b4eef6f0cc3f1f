use std::{error::Error as _, io, path::PathBuf};

use owo_colors::{OwoColorize, Stream};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File does not contain {expected} student names.")]
    WrongEntryCount { expected: usize },
    #[error("Name on line {line} has {length} characters, names must be shorter than {max}.")]
    NameTooLong { line: usize, length: usize, max: usize },
    #[error("Can't pick {requested} names out of {available}.")]
    SelectionTooLarge { requested: usize, available: usize },
    #[error("{0}")]
    InvalidSettings(&'static str),
}

pub trait UnwrapOrExplode<T> {
    fn unwrap_or_explode(self) -> T;
}

impl<T> UnwrapOrExplode<T> for Result<T> {
    fn unwrap_or_explode(self) -> T {
        match self {
            Ok(inner) => inner,
            Err(err) => explode_error(&err),
        }
    }
}

fn explode_error(err: &Error) -> ! {
    crate::showln!(
        "Error".if_supports_color(Stream::Stdout, |text| text.red()),
        ": ",
        err,
    );
    if let Some(causes) = describe_causes(err) {
        crate::showln!("  ", causes);
    }
    std::process::exit(1)
}

/// Every error below `err` in the source chain, joined into a single line.
fn describe_causes(err: &Error) -> Option<String> {
    let mut causes = Vec::new();
    let mut next = err.source();

    while let Some(cause) = next {
        causes.push(cause.to_string());
        next = cause.source();
    }

    (!causes.is_empty()).then(|| causes.join(": "))
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn wrong_entry_count_message() {
        let err = Error::WrongEntryCount { expected: 60 };
        assert_eq!(err.to_string(), "File does not contain 60 student names.");
    }

    #[test]
    fn open_error_keeps_its_cause() {
        let err = Error::Open {
            path: "students.txt".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert_eq!(err.to_string(), "Could not open students.txt");
        assert!(err.source().is_some());
    }

    #[test]
    fn causes_reach_the_os_reason() {
        let path = std::path::Path::new("this/file/does/not/exist.txt");
        let source = fs_err::File::open(path).unwrap_err();

        let err = Error::Open {
            path: path.to_owned(),
            source,
        };
        let causes = describe_causes(&err).unwrap();

        assert!(causes.starts_with("failed to open file `this/file/does/not/exist.txt`"));
        assert!(causes.contains("os error"), "{causes}");
    }

    #[test]
    fn validation_errors_have_no_causes() {
        assert_eq!(describe_causes(&Error::WrongEntryCount { expected: 60 }), None);
    }

    #[test]
    fn name_too_long_points_at_the_line() {
        let err = Error::NameTooLong { line: 3, length: 120, max: 100 };
        assert_eq!(err.to_string(), "Name on line 3 has 120 characters, names must be shorter than 100.");
    }
}
