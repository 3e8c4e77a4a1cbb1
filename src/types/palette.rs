//! The symbol palette and its cycling cursor.

/// Channel values on the 0–255 scale.
///
/// Written as triplets but consumed as one flat stream, so a colour may start
/// in the middle of a triplet.
pub const SYMBOL_PALETTE: [f32; 63] = [
    64.0, 128.0, 192.0, 255.0, 192.0, 64.0, 64.0, 128.0, 255.0, 64.0, 192.0, 128.0, 255.0, 128.0,
    64.0, 192.0, 64.0, 128.0, 64.0, 255.0, 128.0, 128.0, 64.0, 192.0, 64.0, 255.0, 192.0, 255.0,
    64.0, 192.0, 128.0, 64.0, 255.0, 128.0, 192.0, 64.0, 128.0, 192.0, 255.0, 169.0, 196.0, 181.0,
    192.0, 64.0, 255.0, 192.0, 128.0, 64.0, 255.0, 64.0, 128.0, 192.0, 128.0, 255.0, 214.0, 198.0,
    222.0, 255.0, 128.0, 192.0, 255.0, 192.0, 128.0,
];

/// Cycles through a fixed channel sequence, one value per call.
///
/// The cursor only moves forward and wraps at the end of the sequence.
#[derive(Debug, Clone)]
pub struct PaletteCycler {
    values: &'static [f32],
    cursor: usize,
}

impl PaletteCycler {
    /// Cycle through [`SYMBOL_PALETTE`].
    pub fn new() -> Self {
        Self::with_values(&SYMBOL_PALETTE)
    }

    /// Cycle through an arbitrary sequence.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn with_values(values: &'static [f32]) -> Self {
        assert!(!values.is_empty(), "palette must not be empty");
        Self { values, cursor: 0 }
    }

    /// Return the value under the cursor and advance.
    pub fn next_channel(&mut self) -> f32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }

    /// Index of the value the next call will return.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of values in the cycle.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; an empty cycle cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for PaletteCycler {
    fn default() -> Self {
        Self::new()
    }
}
