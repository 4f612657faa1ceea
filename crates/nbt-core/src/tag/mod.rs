pub mod compound;
pub mod kind;
pub mod payload;
pub mod value;

mod text;

#[cfg(feature = "serde")]
mod serialize;

pub use compound::Compound;
pub use kind::TagKind;
pub use payload::TagPayload;
pub use value::Value;
