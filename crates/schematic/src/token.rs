//! Extraction of number tokens from a row.

use bstr::{BString, ByteSlice};

use crate::error::{Error, ErrorKind, LineCol};

/// A maximal horizontal run of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The parsed value of the run.
    pub value: u64,
    /// The row the token is on.
    pub row: usize,
    /// Inclusive start column.
    pub start: usize,
    /// Inclusive end column.
    pub end: usize,
}

impl Token {
    /// The identity of the token, which is its row and start column.
    ///
    /// Two distinct tokens can share a value, but never an identity.
    #[inline]
    pub fn id(&self) -> (usize, usize) {
        (self.row, self.start)
    }

    /// Iterate over every cell covered by the token.
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let row = self.row;
        (self.start..=self.end).map(move |column| (row, column))
    }
}

/// Extract the token which covers `column` in `data`, where `data` is the
/// contents of `row`.
///
/// Returns `None` if the byte at `column` is not a digit or is out of bounds.
/// Any column inside of a run produces the same token.
///
/// # Examples
///
/// ```
/// use schematic::token::extract;
///
/// let token = extract(4, b"..592.....", 3)?.unwrap();
/// assert_eq!(token.value, 592);
/// assert_eq!((token.row, token.start, token.end), (4, 2, 4));
/// assert_eq!(extract(4, b"..592.....", 2)?, Some(token));
/// assert_eq!(extract(4, b"..592.....", 5)?, None);
/// # Ok::<_, schematic::Error>(())
/// ```
pub fn extract(row: usize, data: &[u8], column: usize) -> Result<Option<Token>, Error> {
    let Some(b) = data.get(column) else {
        return Ok(None);
    };

    if !b.is_ascii_digit() {
        return Ok(None);
    }

    let start = data[..column]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |n| n + 1);

    let end = data[column..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(data.len(), |n| column + n)
        - 1;

    let digits = &data[start..=end];

    let value = match digits.to_str_lossy().parse::<u64>() {
        Ok(value) => value,
        Err(source) => {
            return Err(Error::new(
                LineCol::new(row, start),
                ErrorKind::MalformedToken {
                    digits: BString::from(digits),
                    source,
                },
            ));
        }
    };

    Ok(Some(Token {
        value,
        row,
        start,
        end,
    }))
}
