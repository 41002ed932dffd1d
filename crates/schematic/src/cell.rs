/// The classification of a single byte in a schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A digit `0` through `9`, holding its value.
    Digit(u8),
    /// The period character, or whitespace.
    Empty,
    /// Any other character.
    Symbol(u8),
}

impl Cell {
    /// The byte used to fill rows which lie outside of the schematic.
    pub const EMPTY: u8 = b'.';

    /// The symbol which marks a potential gear.
    pub const GEAR: u8 = b'*';

    /// Classify a byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Cell;
    ///
    /// assert_eq!(Cell::from_byte(b'7'), Cell::Digit(7));
    /// assert_eq!(Cell::from_byte(b'.'), Cell::Empty);
    /// assert_eq!(Cell::from_byte(b'#'), Cell::Symbol(b'#'));
    /// ```
    #[inline]
    pub fn from_byte(b: u8) -> Self {
        match b {
            b'0'..=b'9' => Cell::Digit(b - b'0'),
            Self::EMPTY => Cell::Empty,
            b if b.is_ascii_whitespace() => Cell::Empty,
            b => Cell::Symbol(b),
        }
    }

    /// Test if the cell is a `*` symbol.
    #[inline]
    pub fn is_gear_candidate(&self) -> bool {
        matches!(self, Cell::Symbol(Self::GEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn whitespace_is_empty() {
        assert_eq!(Cell::from_byte(b' '), Cell::Empty);
        assert_eq!(Cell::from_byte(b'\t'), Cell::Empty);
    }

    #[test]
    fn only_star_is_gear_candidate() {
        assert!(Cell::from_byte(b'*').is_gear_candidate());
        assert!(!Cell::from_byte(b'#').is_gear_candidate());
        assert!(!Cell::from_byte(b'8').is_gear_candidate());
    }
}
