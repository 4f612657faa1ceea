//! Typed literal construction
//!
//! Builds lists from native values whose kind is known at compile time.
//! These constructors never infer a kind and never fail.

use crate::tag::compound::Compound;
use crate::tag::payload::TagPayload;

use super::list::TagList;

impl TagList {
    /// Build a list of kind `T::KIND` from native payloads.
    ///
    /// The kind is fixed even when `items` is empty.
    ///
    /// ```
    /// use nbt_core::{TagKind, TagList};
    ///
    /// let list = TagList::of([1i16, 2, 3]);
    /// assert_eq!(list.element_kind(), Some(TagKind::Short));
    /// assert_eq!(TagList::of(Vec::<f32>::new()).element_kind(), Some(TagKind::Float));
    /// ```
    pub fn of<T, I>(items: I) -> Self
    where
        T: TagPayload,
        I: IntoIterator<Item = T>,
    {
        TagList::from_parts(T::KIND, items.into_iter().map(T::into_value).collect())
    }

    pub fn bytes(items: impl IntoIterator<Item = i8>) -> Self {
        Self::of(items)
    }

    pub fn shorts(items: impl IntoIterator<Item = i16>) -> Self {
        Self::of(items)
    }

    pub fn ints(items: impl IntoIterator<Item = i32>) -> Self {
        Self::of(items)
    }

    pub fn longs(items: impl IntoIterator<Item = i64>) -> Self {
        Self::of(items)
    }

    pub fn floats(items: impl IntoIterator<Item = f32>) -> Self {
        Self::of(items)
    }

    pub fn doubles(items: impl IntoIterator<Item = f64>) -> Self {
        Self::of(items)
    }

    /// Accepts anything string-like (`&str`, `String`, ...)
    pub fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::of(items.into_iter().map(Into::into).collect::<Vec<String>>())
    }

    pub fn lists(items: impl IntoIterator<Item = TagList>) -> Self {
        Self::of(items)
    }

    pub fn compounds(items: impl IntoIterator<Item = Compound>) -> Self {
        Self::of(items)
    }

    pub fn byte_arrays(items: impl IntoIterator<Item = Vec<i8>>) -> Self {
        Self::of(items)
    }

    pub fn int_arrays(items: impl IntoIterator<Item = Vec<i32>>) -> Self {
        Self::of(items)
    }
}

impl<T: TagPayload> From<Vec<T>> for TagList {
    fn from(items: Vec<T>) -> Self {
        TagList::of(items)
    }
}

/// Build a [`TagList`] from literal payloads of one native type.
///
/// ```
/// use nbt_core::{tag_list, TagKind};
///
/// let list = tag_list![1i64, 2, 3];
/// assert_eq!(list.element_kind(), Some(TagKind::Long));
/// assert_eq!(list.len(), 3);
/// assert!(tag_list![].element_kind().is_none());
/// ```
#[macro_export]
macro_rules! tag_list {
    () => {
        $crate::TagList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::TagList::of([$($item),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::kind::TagKind;
    use crate::tag::value::Value;

    #[test]
    fn every_shorthand_fixes_its_kind() {
        let cases = [
            (TagList::bytes([]), TagKind::Byte),
            (TagList::shorts([]), TagKind::Short),
            (TagList::ints([]), TagKind::Int),
            (TagList::longs([]), TagKind::Long),
            (TagList::floats([]), TagKind::Float),
            (TagList::doubles([]), TagKind::Double),
            (TagList::strings(Vec::<String>::new()), TagKind::String),
            (TagList::lists([]), TagKind::List),
            (TagList::compounds([]), TagKind::Compound),
            (TagList::byte_arrays([]), TagKind::ByteArray),
            (TagList::int_arrays([]), TagKind::IntArray),
        ];
        for (list, kind) in cases {
            assert_eq!(list.element_kind(), Some(kind));
            assert!(list.is_empty());
        }
    }

    #[test]
    fn values_are_wrapped_in_order() {
        let list = TagList::strings(["a", "b"]);
        assert_eq!(list.as_slice(), &[Value::from("a"), Value::from("b")]);

        let list = TagList::int_arrays([vec![1, 2], vec![]]);
        assert_eq!(list[0], Value::IntArray(vec![1, 2]));
        assert_eq!(list[1], Value::IntArray(vec![]));
    }

    #[test]
    fn from_vec_matches_of() {
        assert_eq!(TagList::from(vec![1.5f64, 2.5]), TagList::doubles([1.5, 2.5]));
    }

    #[test]
    fn empty_typed_list_still_rejects_other_kinds() {
        let mut list = TagList::bytes([]);
        assert!(list.push(1i32).is_err());
        list.push(1i8).expect("push failed");
        assert_eq!(list.len(), 1);
    }
}
