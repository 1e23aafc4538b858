use super::{err::InputError, types::Sequence};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Reads whitespace-delimited tokens from any [`Read`] source, one
/// [`Sequence`] per token.
pub struct TokenReader<R: Read> {
    token_reader: BufReader<R>,
    token_buffer: Vec<u8>,
}

impl<R: Read> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        TokenReader {
            token_reader: BufReader::new(inner),
            token_buffer: Vec::new(),
        }
    }

    /// Reads the next token, naming it `what` in any error and rejecting it if
    /// it is longer than `max_len`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingToken`] at end of input,
    /// [`InputError::TooLong`] if the ceiling is exceeded, or
    /// [`InputError::Io`] if reading fails.
    pub fn next_token(&mut self, what: &'static str, max_len: Option<usize>) -> Result<Sequence, InputError> {
        let token = self.read_token()?.ok_or(InputError::MissingToken(what))?;
        match max_len {
            Some(max) if token.len() > max => Err(InputError::TooLong {
                what,
                len: token.len(),
                max,
            }),
            _ => Ok(token),
        }
    }

    fn read_token(&mut self) -> Result<Option<Sequence>, InputError> {
        self.token_buffer.clear();

        loop {
            let available = self.token_reader.fill_buf()?;
            if available.is_empty() {
                break;
            }

            let skip = if self.token_buffer.is_empty() {
                available.iter().take_while(|b| b.is_ascii_whitespace()).count()
            } else {
                0
            };
            let rest = &available[skip..];
            let take = rest.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            self.token_buffer.extend_from_slice(&rest[..take]);

            let done = take < rest.len();
            self.token_reader.consume(skip + take);
            if done {
                break;
            }
        }

        if self.token_buffer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Sequence::from(self.token_buffer.as_slice())))
        }
    }
}

impl<R: Read> Iterator for TokenReader<R> {
    type Item = Result<Sequence, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_token().transpose()
    }
}

/// Reads a whole sequence from `reader`, dropping all ASCII whitespace and
/// converting to uppercase.
///
/// # Errors
///
/// Returns [`InputError::Io`] if reading fails.
pub fn read_sequence<R: Read>(mut reader: R) -> Result<Sequence, InputError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    raw.retain(|b| !b.is_ascii_whitespace());
    raw.make_ascii_uppercase();
    Ok(Sequence::from(raw))
}

/// Opens `filename` and reads it with [`read_sequence`].
///
/// # Errors
///
/// Returns [`InputError::Io`] if the file cannot be opened or read.
pub fn read_sequence_file(filename: impl AsRef<Path>) -> Result<Sequence, InputError> {
    read_sequence(File::open(filename)?)
}
