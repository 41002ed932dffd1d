use core::fmt;

use serde::{Deserialize, Serialize};

/// The two running totals of a scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Totals {
    /// Sum of every distinct number adjacent to a symbol.
    pub numbers: u64,
    /// Sum of the ratios of every gear.
    pub gear_ratios: u64,
}

impl Totals {
    /// Construct new totals.
    #[inline]
    pub const fn new(numbers: u64, gear_ratios: u64) -> Self {
        Self {
            numbers,
            gear_ratios,
        }
    }

    /// Add a counted part number, returning `None` on overflow.
    #[inline]
    pub fn add_number(&mut self, value: u64) -> Option<()> {
        self.numbers = self.numbers.checked_add(value)?;
        Some(())
    }

    /// Add the ratio of a gear, returning `None` on overflow.
    #[inline]
    pub fn add_gear_ratio(&mut self, ratio: u64) -> Option<()> {
        self.gear_ratios = self.gear_ratios.checked_add(ratio)?;
        Some(())
    }

    /// Combine two totals, returning `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Totals;
    ///
    /// let a = Totals::new(1, 2);
    /// assert_eq!(a.checked_add(Totals::new(3, 4)), Some(Totals::new(4, 6)));
    /// assert_eq!(a.checked_add(Totals::new(u64::MAX, 0)), None);
    /// ```
    #[inline]
    pub fn checked_add(self, other: Totals) -> Option<Totals> {
        Some(Self {
            numbers: self.numbers.checked_add(other.numbers)?,
            gear_ratios: self.gear_ratios.checked_add(other.gear_ratios)?,
        })
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Totals {
            numbers,
            gear_ratios,
        } = self;

        write!(f, "numbers: {numbers}, gear ratios: {gear_ratios}")
    }
}
