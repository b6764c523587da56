use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("no code table available, encode some text first")]
    NoTableAvailable,

    #[error("malformed payload: {pending_bits} trailing bit(s) do not form a code after {decoded} decoded symbol(s)")]
    MalformedPayload { decoded: usize, pending_bits: usize },

    #[error("invalid binary digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}
