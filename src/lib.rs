//! Strict parser for the query of `BitTorrent` tracker announce URLs.
//!
//! ```
//! let query = announce_query::parse(
//!     "https://tracker.example/announce?info_hash=%12%34%56&peer_id=-XX0001-abcdefghijkl&port=6881",
//! )?;
//! assert_eq!(query.get("info_hash"), Some(&[0x12, 0x34, 0x56][..]));
//! assert_eq!(query.get_str("port"), Some("6881"));
//! # Ok::<(), announce_query::ParseError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod parsed_query;
mod parser;
mod percent;
mod tokenizer;

// Public API
pub use error::{ErrorKind, ParseError};
pub use parsed_query::{Iter, ParsedQuery};
pub use parser::options::{DuplicateKeys, ParseOptions};
pub use parser::{parse, parse_with};
pub use percent::encode_component;

pub type Result<T> = core::result::Result<T, ParseError>;
