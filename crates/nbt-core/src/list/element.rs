//! Mutable element access
//!
//! Handles that let callers edit list elements without being able to store
//! a value of another kind behind the list's back.

use std::ops::Deref;
use std::slice;

use tracing::debug;

use crate::error::{NbtError, NbtResult};
use crate::tag::payload::TagPayload;
use crate::tag::value::Value;

/// Mutable handle to one element of a [`TagList`](super::TagList).
///
/// Reads go through `Deref<Target = Value>`. Writes either edit the payload
/// in place or swap in a value of the same kind.
#[derive(Debug)]
pub struct ElementMut<'a> {
    slot: &'a mut Value,
}

impl<'a> ElementMut<'a> {
    pub(super) fn new(slot: &'a mut Value) -> Self {
        ElementMut { slot }
    }

    /// Mutably borrow the payload as `T`, if the element is of kind `T::KIND`
    pub fn payload_mut<T: TagPayload>(&mut self) -> Option<&mut T> {
        self.slot.payload_mut::<T>()
    }

    /// Consume the handle, keeping the payload borrow for the full lifetime
    pub fn into_payload_mut<T: TagPayload>(self) -> Option<&'a mut T> {
        T::from_value_mut(self.slot)
    }

    /// Swap in a value of the same kind, returning the old one
    pub fn replace(&mut self, value: impl Into<Value>) -> NbtResult<Value> {
        let value = value.into();
        let expected = self.slot.kind();
        if value.kind() != expected {
            debug!(expected = %expected, found = %value.kind(), "rejected element replacement");
            return Err(NbtError::TypeMismatch {
                expected: Some(expected),
                found: value.kind(),
            });
        }
        Ok(std::mem::replace(self.slot, value))
    }
}

impl Deref for ElementMut<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        self.slot
    }
}

/// Iterator over mutable element handles, in insertion order
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: slice::IterMut<'a, Value>,
}

impl<'a> IterMut<'a> {
    pub(super) fn new(inner: slice::IterMut<'a, Value>) -> Self {
        IterMut { inner }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = ElementMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(ElementMut::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(ElementMut::new)
    }
}

impl ExactSizeIterator for IterMut<'_> {}

#[cfg(test)]
mod tests {
    use crate::tag::kind::TagKind;
    use crate::tag::value::Value;
    use crate::tag_list;
    use crate::NbtError;

    #[test]
    fn payload_edits_keep_kind() {
        let mut list = tag_list![1i32, 2, 3];
        for mut element in list.iter_mut() {
            if let Some(n) = element.payload_mut::<i32>() {
                *n *= 10;
            }
        }
        assert_eq!(list, tag_list![10i32, 20, 30]);
        assert_eq!(list.element_kind(), Some(TagKind::Int));
    }

    #[test]
    fn replace_rejects_other_kinds() {
        let mut list = tag_list![String::from("a")];
        let mut element = list.get_mut(0).expect("index 0");
        let err = element.replace(5i8).unwrap_err();
        assert_eq!(
            err,
            NbtError::TypeMismatch {
                expected: Some(TagKind::String),
                found: TagKind::Byte,
            }
        );
        assert!(element.replace(Value::Null).is_err());
        assert_eq!(element.replace("b").expect("replace"), Value::from("a"));
        assert_eq!(list[0], Value::from("b"));
    }

    #[test]
    fn nested_lists_are_reachable_through_handles() {
        let mut outer = tag_list![tag_list![1i8], tag_list![2i8]];
        let inner = outer
            .get_mut(1)
            .expect("index 1")
            .into_payload_mut::<crate::TagList>()
            .expect("list payload");
        inner.push(3i8).expect("push");
        assert!(inner.push(3i16).is_err());
        assert_eq!(outer[1], Value::from(tag_list![2i8, 3]));
    }
}
