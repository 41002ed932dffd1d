use std::collections::HashSet;

use crate::token::Token;

/// Cells which belong to a token that has already been counted.
///
/// Scoped to a single scan.
#[derive(Debug, Default)]
pub struct Visited {
    cells: HashSet<(usize, usize)>,
}

impl Visited {
    /// Construct an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Test if the given token has been counted.
    #[inline]
    pub fn contains(&self, token: &Token) -> bool {
        self.cells.contains(&token.id())
    }

    /// Mark every cell of the token as counted, returning `true` if the token
    /// had not been counted before.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Visited;
    /// use schematic::token::extract;
    ///
    /// let mut visited = Visited::new();
    /// let a = extract(0, b"..633.", 2)?.unwrap();
    /// let b = extract(0, b"..633.", 4)?.unwrap();
    ///
    /// assert!(visited.insert(&a));
    /// assert!(!visited.insert(&b));
    /// assert_eq!(visited.len(), 3);
    /// # Ok::<_, schematic::Error>(())
    /// ```
    pub fn insert(&mut self, token: &Token) -> bool {
        if self.contains(token) {
            return false;
        }

        self.cells.extend(token.cells());
        true
    }

    /// Number of cells marked.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if no cells have been marked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
