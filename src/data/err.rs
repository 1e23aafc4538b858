use std::fmt::Display;
use thiserror::Error;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Length-precondition violations raised before a motif search is attempted.
///
/// These are the only failure modes of the search functions: any byte value is
/// acceptable in either the subject or the motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The subject was shorter than the minimum the policy requires.
    #[error("the sequence has length {len} but at least {min} is required")]
    TooShort { len: usize, min: usize },
    /// The motif did not have the fixed length the policy requires.
    #[error("the motif has length {len} but exactly {expected} is required")]
    LengthMismatch { len: usize, expected: usize },
    /// The motif was longer than the subject under the unbounded policy.
    #[error("the motif (length {motif_len}) is longer than the sequence (length {subject_len})")]
    MotifLongerThanSubject { motif_len: usize, subject_len: usize },
}

impl GetCode for SearchError {}

/// Errors encountered while acquiring sequences from a reader.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before the named token was read.
    #[error("no {0} was provided")]
    MissingToken(&'static str),
    /// A token exceeded the caller's length ceiling.
    #[error("the {what} has length {len}, exceeding the limit of {max}")]
    TooLong { what: &'static str, len: usize, max: usize },
}

impl GetCode for InputError {
    #[inline]
    fn get_code(&self) -> i32 {
        match self {
            InputError::Io(e) => e.get_code(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn search_error_messages() {
        let e = SearchError::TooShort { len: 2, min: 5 };
        assert_eq!(e.to_string(), "the sequence has length 2 but at least 5 is required");

        let e = SearchError::LengthMismatch { len: 4, expected: 5 };
        assert_eq!(e.to_string(), "the motif has length 4 but exactly 5 is required");
        assert_eq!(e.get_code(), 1);
    }

    #[test]
    fn input_error_codes() {
        let e = InputError::MissingToken("motif");
        assert_eq!(e.to_string(), "no motif was provided");
        assert_eq!(e.get_code(), 1);

        let e: InputError = std::io::Error::from_raw_os_error(2).into();
        assert_eq!(e.get_code(), 2);
    }
}
