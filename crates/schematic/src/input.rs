//! Sources of schematic lines.


use core::mem;
use std::io::BufRead;

use crate::error::{Error, ErrorKind};

pub(crate) const NL: u8 = b'\n';
const CR: u8 = b'\r';

/// A forward-only source of schematic lines.
///
/// Lines are returned without their line terminator.
pub trait LineSource {
    /// Get the next line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> Result<Option<&[u8]>, Error>;
}

impl<S> LineSource for &mut S
where
    S: ?Sized + LineSource,
{
    #[inline]
    fn next_line(&mut self) -> Result<Option<&[u8]>, Error> {
        (**self).next_line()
    }
}

/// Lines of an in-memory buffer.
///
/// # Examples
///
/// ```
/// use schematic::{LineSource, Lines};
///
/// let mut lines = Lines::new(b"467..\r\n...*.\n");
/// assert_eq!(lines.next_line()?, Some(&b"467.."[..]));
/// assert_eq!(lines.next_line()?, Some(&b"...*."[..]));
/// assert_eq!(lines.next_line()?, None);
/// # Ok::<_, schematic::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lines<'a> {
    /// Remaining data.
    data: &'a [u8],
    /// Byte offset of the remaining data.
    index: usize,
}

impl<'a> Lines<'a> {
    /// Construct a new line source over the given data.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Byte offset of the next line.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if there is no more data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Split off the data up until the next newline or the end of the input.
    fn split_once(&mut self) -> Option<&'a [u8]> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(NL, self.data) else {
            self.index = self.index.saturating_add(self.data.len());
            return Some(mem::take(&mut self.data));
        };

        let line = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(line)
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }
}

impl LineSource for Lines<'_> {
    #[inline]
    fn next_line(&mut self) -> Result<Option<&[u8]>, Error> {
        Ok(self.split_once().map(trim_cr))
    }
}

/// Lines streamed from a buffered reader.
///
/// A single buffer is reused for every line, so memory is bounded by the
/// longest line.
pub struct Reader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Construct a new line source reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            line: 0,
        }
    }
}

impl<R> LineSource for Reader<R>
where
    R: BufRead,
{
    fn next_line(&mut self) -> Result<Option<&[u8]>, Error> {
        self.buf.clear();

        let n = self
            .reader
            .read_until(NL, &mut self.buf)
            .map_err(|error| Error::row(self.line, ErrorKind::Io(error)))?;

        if n == 0 {
            return Ok(None);
        }

        self.line += 1;

        let line = match &self.buf[..] {
            [rest @ .., NL] => rest,
            line => line,
        };

        Ok(Some(trim_cr(line)))
    }
}

/// Lines provided by an iterator of strings.
///
/// # Examples
///
/// ```
/// use schematic::{IterLines, LineSource};
///
/// let mut lines = IterLines::new(["617*", "...."]);
/// assert_eq!(lines.next_line()?, Some(&b"617*"[..]));
/// assert_eq!(lines.next_line()?, Some(&b"...."[..]));
/// assert_eq!(lines.next_line()?, None);
/// # Ok::<_, schematic::Error>(())
/// ```
pub struct IterLines<I>
where
    I: Iterator,
{
    iter: I,
    current: Option<I::Item>,
}

impl<I> IterLines<I>
where
    I: Iterator,
{
    /// Construct a new line source out of an iterator.
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter(),
            current: None,
        }
    }
}

impl<I> LineSource for IterLines<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    #[inline]
    fn next_line(&mut self) -> Result<Option<&[u8]>, Error> {
        self.current = self.iter.next();
        Ok(self
            .current
            .as_ref()
            .map(|line| trim_cr(line.as_ref().as_bytes())))
    }
}

#[inline]
fn trim_cr(line: &[u8]) -> &[u8] {
    match line {
        [rest @ .., CR] => rest,
        line => line,
    }
}
