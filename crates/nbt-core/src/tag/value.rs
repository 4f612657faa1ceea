//! Tag Value Representation
//!
//! Defines the tagged value shared by the whole tag model.
//! A value carries exactly one payload whose kind matches its variant.

use crate::list::TagList;

use super::compound::Compound;
use super::kind::TagKind;
use super::payload::TagPayload;

/// Tagged value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,

    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),

    ByteArray(Vec<i8>),
    String(String),
    List(TagList),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl Value {
    /// Kind of the payload currently held
    pub fn kind(&self) -> TagKind {
        match self {
            Value::Null => TagKind::Null,
            Value::Byte(_) => TagKind::Byte,
            Value::Short(_) => TagKind::Short,
            Value::Int(_) => TagKind::Int,
            Value::Long(_) => TagKind::Long,
            Value::Float(_) => TagKind::Float,
            Value::Double(_) => TagKind::Double,
            Value::ByteArray(_) => TagKind::ByteArray,
            Value::String(_) => TagKind::String,
            Value::List(_) => TagKind::List,
            Value::Compound(_) => TagKind::Compound,
            Value::IntArray(_) => TagKind::IntArray,
        }
    }

    /// Whether the value holds a real payload
    pub fn has_value(&self) -> bool {
        !self.is_null()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the payload as `T`, if the value is of kind `T::KIND`.
    ///
    /// ```
    /// use nbt_core::Value;
    ///
    /// let v = Value::from(7i32);
    /// assert_eq!(v.payload::<i32>(), Some(&7));
    /// assert_eq!(v.payload::<i64>(), None);
    /// ```
    pub fn payload<T: TagPayload>(&self) -> Option<&T> {
        T::from_value(self)
    }

    /// Mutably borrow the payload as `T`. Writing through the reference can
    /// never change the value's kind.
    pub fn payload_mut<T: TagPayload>(&mut self) -> Option<&mut T> {
        T::from_value_mut(self)
    }

    /// Take the value out, leaving `Null` behind
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<T: TagPayload> From<T> for Value {
    fn from(payload: T) -> Self {
        payload.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(Value::Null.kind(), TagKind::Null);
        assert_eq!(Value::from(1i8).kind(), TagKind::Byte);
        assert_eq!(Value::from(1i16).kind(), TagKind::Short);
        assert_eq!(Value::from(1i32).kind(), TagKind::Int);
        assert_eq!(Value::from(1i64).kind(), TagKind::Long);
        assert_eq!(Value::from(1.0f32).kind(), TagKind::Float);
        assert_eq!(Value::from(1.0f64).kind(), TagKind::Double);
        assert_eq!(Value::from("x").kind(), TagKind::String);
        assert_eq!(Value::from(vec![1i8]).kind(), TagKind::ByteArray);
        assert_eq!(Value::from(vec![1i32]).kind(), TagKind::IntArray);
        assert_eq!(Value::from(TagList::new()).kind(), TagKind::List);
        assert_eq!(Value::from(Compound::new()).kind(), TagKind::Compound);
    }

    #[test]
    fn only_null_lacks_a_value() {
        assert!(!Value::Null.has_value());
        assert!(Value::Null.is_null());
        assert!(Value::from(0i32).has_value());
        assert!(Value::from(String::new()).has_value());
    }

    #[test]
    fn equality_requires_same_kind() {
        assert_eq!(Value::from(1i32), Value::Int(1));
        assert_ne!(Value::from(1i32), Value::from(1i64));
        assert_ne!(Value::from(1i32), Value::from(2i32));
    }

    #[test]
    fn payload_mut_edits_in_place() {
        let mut v = Value::from("abc");
        v.payload_mut::<String>().expect("string payload").push('d');
        assert_eq!(v, Value::from("abcd"));
        assert!(v.payload_mut::<i32>().is_none());
    }

    #[test]
    fn take_leaves_null() {
        let mut v = Value::from(5i16);
        let taken = v.take();
        assert_eq!(taken, Value::Short(5));
        assert!(v.is_null());
    }
}
