//! Core types: errors and codec configuration.

pub mod config;
pub mod error;

pub use config::{CodecConfig, DEFAULT_COMPACT_PREFIX, DEFAULT_MAX_CODE_LENGTH};
pub use error::{DeckCodeError, ErrorKind, Result};
