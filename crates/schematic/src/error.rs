use core::fmt;
use std::io;
use std::num::ParseIntError;

use bstr::BString;

/// A line and column combination.
///
/// Lines are stored zero-based and displayed one-based, columns are zero-based
/// byte offsets into the line.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The zero-based row of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The zero-based column of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("inconsistent width; expected {expected}, but got {actual}")]
    InconsistentWidth { expected: usize, actual: usize },
    #[error("malformed number token `{digits}`")]
    MalformedToken {
        digits: BString,
        #[source]
        source: ParseIntError,
    },
    #[error("integer overflow while accumulating totals")]
    Overflow,
    #[error("failed to read line")]
    Io(#[source] io::Error),
}

/// Error raised while scanning a schematic.
#[derive(Debug)]
pub struct Error {
    pos: LineCol,
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error at the given position.
    #[inline]
    pub(crate) fn new(pos: LineCol, kind: ErrorKind) -> Self {
        Self { pos, kind }
    }

    /// Construct an error which is associated with the start of a row.
    #[inline]
    pub(crate) fn row(row: usize, kind: ErrorKind) -> Self {
        Self::new(LineCol::new(row, 0), kind)
    }

    /// Position in the schematic the error refers to.
    #[inline]
    pub fn pos(&self) -> LineCol {
        self.pos
    }

    /// Access the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Take the kind of the error, discarding its position.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.kind, self.pos)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::MalformedToken { source, .. } => Some(source),
            ErrorKind::Io(error) => Some(error),
            _ => None,
        }
    }
}
