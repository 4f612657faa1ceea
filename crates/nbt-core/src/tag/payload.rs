//! Native payload types
//!
//! Maps each native Rust representation onto the tag kind that wraps it,
//! so code that knows the element type statically never has to inspect kinds.

use crate::list::TagList;

use super::compound::Compound;
use super::kind::TagKind;
use super::value::Value;

/// A native type carried by exactly one tag kind.
pub trait TagPayload: Sized {
    /// Kind of the value wrapping this payload
    const KIND: TagKind;

    /// Wrap the payload into a value of kind `KIND`
    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<&Self>;

    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;
}

macro_rules! impl_tag_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TagPayload for $ty {
                const KIND: TagKind = TagKind::$variant;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }

                fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
                    match value {
                        Value::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_tag_payload! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    TagList => List,
    Compound => Compound,
    Vec<i32> => IntArray,
}
