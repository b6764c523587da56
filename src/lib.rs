//! Lossless text compression with Huffman codes.
//!
//! ```
//! use huffman_text::Huffman;
//!
//! let mut h = Huffman::new();
//! let payload = h.encode_str("aab");
//! assert_eq!(payload.len(), 3);
//! assert_eq!(h.decode_to_string(&payload).unwrap(), "aab");
//! ```

pub mod code;
pub mod coder;
pub mod config;
pub mod error;
pub mod frequency;
pub mod payload;
pub mod report;
pub mod tree;

pub use code::{CodeTable, ReverseCodeTable};
pub use coder::{Huffman, Snapshot};
pub use config::Config;
pub use error::HuffmanError;
pub use frequency::FrequencyTable;
pub use payload::EncodedPayload;
pub use report::Report;
pub use tree::{Node, Tree};
