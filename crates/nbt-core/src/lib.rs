//! NBT Core Library
//!
//! In-memory document model for the Named Binary Tag format: the tagged
//! value, the homogeneous tag list, and a minimal compound map.
//! Byte-level encoding and decoding live outside this crate.

pub mod config;
pub mod error;
pub mod list;
pub mod tag;

// Re-export commonly used types
pub use config::ListConfig;
pub use error::{NbtError, NbtResult};
pub use list::{ElementMut, TagList};
pub use tag::{Compound, TagKind, TagPayload, Value};
