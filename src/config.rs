/// Tunables for a [`Huffman`](crate::Huffman) coder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    single_symbol_code: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit used as the whole code when the input has one distinct symbol.
    /// Defaults to `false`, i.e. the code "0".
    pub fn with_single_symbol_code(mut self, bit: bool) -> Self {
        self.single_symbol_code = bit;
        self
    }

    pub fn single_symbol_code(&self) -> bool {
        self.single_symbol_code
    }
}
