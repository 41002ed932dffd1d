//! Scanner for engine schematics.
//!
//! A schematic is a rectangular block of text made up of digits, periods and
//! symbols. Every maximal horizontal run of digits which is adjacent to a
//! symbol, including diagonally, is a part number. A `*` which is adjacent to
//! exactly two part numbers is a gear, and its ratio is the product of the two.
//!
//! The schematic is scanned in a single forward pass, keeping only three rows
//! in memory at any one time.
//!
//! # Examples
//!
//! ```
//! use schematic::{Lines, Totals};
//!
//! let input = b"467..114..
//! ...*......
//! ..35..633.
//! ......#...
//! 617*......
//! .....+.58.
//! ..592.....
//! ......755.
//! ...$.*....
//! .664.598..
//! ";
//!
//! let totals = schematic::scan(Lines::new(input))?;
//! assert_eq!(totals, Totals::new(4361, 467835));
//! # Ok::<_, schematic::Error>(())
//! ```

mod cell;
pub mod cli;
mod error;
mod input;
pub mod scan;
pub mod token;
mod totals;
mod visited;
mod window;

pub use self::cell::Cell;
pub use self::error::{Error, ErrorKind, LineCol};
pub use self::input::{IterLines, LineSource, Lines, Reader};
pub use self::scan::{scan, Scanner};
pub use self::token::Token;
pub use self::totals::Totals;
pub use self::visited::Visited;
pub use self::window::{Frame, Offset, State, Window};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::{LineSource, Lines, Reader, Totals};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
