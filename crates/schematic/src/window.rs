//! A three row window sliding over the schematic.

#[cfg(test)]
mod tests;

use core::mem;

use bstr::BStr;

use crate::cell::Cell;
use crate::error::{Error, ErrorKind};

/// The state of a [Window].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No row has been pushed.
    BeforeFirst,
    /// At least one row has been pushed.
    Streaming,
    /// End of input has been signalled and the last row was evaluated.
    AfterLast,
    /// Nothing more will be produced.
    Done,
}

/// A row relative to the row being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// The row above.
    Prev,
    /// The row being evaluated.
    Curr,
    /// The row below.
    Next,
}

/// The rows surrounding the row currently being evaluated.
///
/// Rows outside of the schematic are filled with `.`, so all three slices
/// always have the same length.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Index of the current row.
    pub row: usize,
    /// The row above, or `.` when `row` is the first row.
    pub prev: &'a [u8],
    /// The row being evaluated.
    pub curr: &'a [u8],
    /// The row below, or `.` when `row` is the last row.
    pub next: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Get the index and contents of the row at the given offset.
    ///
    /// Returns `None` for the row before the first row, which has no index.
    #[inline]
    pub fn get(&self, offset: Offset) -> Option<(usize, &'a [u8])> {
        match offset {
            Offset::Prev => Some((self.row.checked_sub(1)?, self.prev)),
            Offset::Curr => Some((self.row, self.curr)),
            Offset::Next => Some((self.row.checked_add(1)?, self.next)),
        }
    }
}

/// Holds the previous, current and next rows of the schematic.
///
/// # Examples
///
/// ```
/// use schematic::Window;
///
/// let mut window = Window::new();
/// assert!(window.advance(Some(&b"1."[..])).unwrap().is_none());
///
/// let frame = window.advance(Some(&b".*"[..])).unwrap().unwrap();
/// assert_eq!((frame.row, frame.prev, frame.curr, frame.next), (0, &b".."[..], &b"1."[..], &b".*"[..]));
///
/// let frame = window.advance(None).unwrap().unwrap();
/// assert_eq!((frame.row, frame.prev, frame.curr, frame.next), (1, &b"1."[..], &b".*"[..], &b".."[..]));
///
/// assert!(window.advance(None).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct Window {
    state: State,
    /// Width of the schematic, as established by the first row.
    width: usize,
    /// Number of rows pushed.
    rows: usize,
    /// A row which was shorter than the width. Only allowed as the last row.
    short: Option<(usize, usize)>,
    prev: Vec<u8>,
    curr: Vec<u8>,
    next: Vec<u8>,
}

impl Default for Window {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Window {
    /// Construct a new empty window.
    pub const fn new() -> Self {
        Self {
            state: State::BeforeFirst,
            width: 0,
            rows: 0,
            short: None,
            prev: Vec::new(),
            curr: Vec::new(),
            next: Vec::new(),
        }
    }

    /// The current state of the window.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// The width of the schematic, `0` until the first row has been pushed.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows pushed so far.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Advance the window by pushing `line`, or by signalling the end of input
    /// with `None`.
    ///
    /// Returns the frame for the row which became ready for evaluation. Exactly
    /// one frame is produced for each row pushed.
    pub fn advance(&mut self, line: Option<&[u8]>) -> Result<Option<Frame<'_>>, Error> {
        match (self.state, line) {
            (State::BeforeFirst, Some(line)) => {
                self.width = line.len();
                fill(&mut self.prev, &[], self.width);
                fill(&mut self.curr, &[], self.width);
                fill(&mut self.next, &[], self.width);
                self.shift(line)?;
                self.state = State::Streaming;
                Ok(None)
            }
            (State::BeforeFirst, None) => {
                self.state = State::Done;
                Ok(None)
            }
            (State::Streaming, Some(line)) => {
                self.shift(line)?;
                Ok(Some(self.frame(self.rows - 2)))
            }
            (State::Streaming, None) => {
                self.rotate();
                fill(&mut self.next, &[], self.width);
                self.state = State::AfterLast;
                Ok(Some(self.frame(self.rows - 1)))
            }
            (State::AfterLast | State::Done, _) => {
                self.state = State::Done;
                Ok(None)
            }
        }
    }

    /// Shift a new row into the window, validating its width.
    fn shift(&mut self, line: &[u8]) -> Result<(), Error> {
        let row = self.rows;

        if let Some((short, actual)) = self.short {
            return Err(Error::row(
                short,
                ErrorKind::InconsistentWidth {
                    expected: self.width,
                    actual,
                },
            ));
        }

        if line.len() > self.width {
            return Err(Error::row(
                row,
                ErrorKind::InconsistentWidth {
                    expected: self.width,
                    actual: line.len(),
                },
            ));
        }

        if line.len() < self.width {
            log::trace!("{row}: short row of width {}", line.len());
            self.short = Some((row, line.len()));
        }

        self.rotate();
        fill(&mut self.next, line, self.width);
        self.rows += 1;
        Ok(())
    }

    /// Rotate buffers so that the oldest buffer ends up in `next`.
    #[inline]
    fn rotate(&mut self) {
        mem::swap(&mut self.prev, &mut self.curr);
        mem::swap(&mut self.curr, &mut self.next);
    }

    #[inline]
    fn frame(&self, row: usize) -> Frame<'_> {
        log::trace!("{row}: {}", BStr::new(&self.curr));

        Frame {
            row,
            prev: &self.prev,
            curr: &self.curr,
            next: &self.next,
        }
    }
}

/// Fill `buf` with `line`, padded with empty cells up to `width`.
#[inline]
fn fill(buf: &mut Vec<u8>, line: &[u8], width: usize) {
    buf.clear();
    buf.extend_from_slice(line);
    buf.resize(width, Cell::EMPTY);
}
