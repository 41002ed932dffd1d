//! Scanning symbols for adjacent part numbers and gears.


use arrayvec::ArrayVec;
use bstr::BStr;

use crate::cell::Cell;
use crate::error::{Error, ErrorKind, LineCol};
use crate::input::LineSource;
use crate::token::{extract, Token};
use crate::totals::Totals;
use crate::visited::Visited;
use crate::window::{Frame, Offset, Window};

/// A position to probe for digits around a symbol.
pub type Probe = (Offset, usize);

/// The distinct tokens adjacent to a single symbol.
///
/// Eight neighbors can at most be covered by six distinct tokens.
pub type Adjacent = ArrayVec<Token, 8>;

/// The neighbors of `column` in a row of the given `width`.
///
/// Columns are clipped to the row, so a symbol at either edge has fewer
/// probes.
///
/// # Examples
///
/// ```
/// use schematic::scan::probes;
/// use schematic::Offset;
///
/// let p = probes(0, 1);
/// assert_eq!(&p[..], &[(Offset::Prev, 0), (Offset::Next, 0)]);
///
/// assert_eq!(probes(4, 10).len(), 8);
/// ```
pub fn probes(column: usize, width: usize) -> ArrayVec<Probe, 8> {
    let mut out = ArrayVec::new();
    let last = width.saturating_sub(1);

    if column > 0 {
        out.push((Offset::Curr, column - 1));
    }

    if column < last {
        out.push((Offset::Curr, column + 1));
    }

    for c in column.saturating_sub(1)..=column.saturating_add(1).min(last) {
        out.push((Offset::Prev, c));
        out.push((Offset::Next, c));
    }

    out
}

/// Collect the distinct tokens found through the given probes.
///
/// Tokens are deduplicated by identity, so a run reached through several
/// probes is only listed once.
pub fn adjacent<I>(frame: &Frame<'_>, probes: I) -> Result<Adjacent, Error>
where
    I: IntoIterator<Item = Probe>,
{
    let mut tokens = Adjacent::new();

    for (offset, column) in probes {
        let Some((row, data)) = frame.get(offset) else {
            continue;
        };

        let Some(token) = extract(row, data, column)? else {
            continue;
        };

        if tokens.iter().any(|t| t.id() == token.id()) {
            continue;
        }

        tokens.push(token);
    }

    Ok(tokens)
}

/// Scans rows of a schematic, accumulating totals.
#[derive(Debug, Default)]
pub struct Scanner {
    visited: Visited,
    totals: Totals,
}

impl Scanner {
    /// Construct a new scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the current row of `frame`, returning what the row contributed
    /// to the totals.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::{Frame, Scanner, Totals};
    ///
    /// let mut scanner = Scanner::new();
    ///
    /// let frame = Frame {
    ///     row: 1,
    ///     prev: b"12..",
    ///     curr: b"..*.",
    ///     next: b"...3",
    /// };
    ///
    /// assert_eq!(scanner.scan_row(frame)?, Totals::new(15, 36));
    /// assert_eq!(scanner.scan_row(frame)?, Totals::new(0, 36));
    /// assert_eq!(scanner.totals(), Totals::new(15, 72));
    /// # Ok::<_, schematic::Error>(())
    /// ```
    pub fn scan_row(&mut self, frame: Frame<'_>) -> Result<Totals, Error> {
        let row = frame.row;
        let mut out = Totals::default();

        for (column, &b) in frame.curr.iter().enumerate() {
            let cell = Cell::from_byte(b);

            if !matches!(cell, Cell::Symbol(..)) {
                continue;
            }

            let pos = LineCol::new(row, column);
            let tokens = adjacent(&frame, probes(column, frame.curr.len()))?;

            log::debug!(
                "{pos}: symbol {:?} with {} adjacent number(s)",
                BStr::new(&[b]),
                tokens.len()
            );

            if let [first, second] = &tokens[..] {
                if cell.is_gear_candidate() {
                    let ratio = first
                        .value
                        .checked_mul(second.value)
                        .ok_or_else(|| Error::new(pos, ErrorKind::Overflow))?;

                    log::debug!("{pos}: gear {} * {} = {ratio}", first.value, second.value);

                    out.add_gear_ratio(ratio)
                        .ok_or_else(|| Error::new(pos, ErrorKind::Overflow))?;
                }
            }

            for token in &tokens {
                if !self.visited.insert(token) {
                    continue;
                }

                log::debug!(
                    "{}: part number {}",
                    LineCol::new(token.row, token.start),
                    token.value
                );

                out.add_number(token.value)
                    .ok_or_else(|| Error::new(pos, ErrorKind::Overflow))?;
            }
        }

        self.totals = self
            .totals
            .checked_add(out)
            .ok_or_else(|| Error::row(row, ErrorKind::Overflow))?;

        Ok(out)
    }

    /// The totals accumulated so far.
    #[inline]
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Cells of counted tokens.
    #[inline]
    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    /// Finish scanning, returning the final totals.
    #[inline]
    pub fn finish(self) -> Totals {
        self.totals
    }
}

/// Scan a whole schematic in a single forward pass over `source`.
///
/// On error no partial totals are produced.
///
/// # Examples
///
/// ```
/// use schematic::{Lines, Totals};
///
/// let totals = schematic::scan(Lines::new(b"467..\n...*.\n..35.\n"))?;
/// assert_eq!(totals, Totals::new(502, 16345));
/// # Ok::<_, schematic::Error>(())
/// ```
pub fn scan<S>(mut source: S) -> Result<Totals, Error>
where
    S: LineSource,
{
    let mut window = Window::new();
    let mut scanner = Scanner::new();

    loop {
        let line = source.next_line()?;
        let eof = line.is_none();

        if let Some(frame) = window.advance(line)? {
            scanner.scan_row(frame)?;
        }

        if eof {
            break;
        }
    }

    log::debug!(
        "scanned {} row(s), {} visited cell(s)",
        window.rows(),
        scanner.visited().len()
    );

    Ok(scanner.finish())
}
