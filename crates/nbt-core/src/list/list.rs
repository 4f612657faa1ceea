//! Homogeneous Tag List
//!
//! Ordered list of tags that all share one element kind.
//! Every typed insertion goes through the same kind gate before the
//! backing storage is touched, so a failed call never leaves a partial change.

use std::ops::Index;
use std::slice;
use std::vec;

use tracing::{debug, trace};

use crate::config::ListConfig;
use crate::error::{NbtError, NbtResult};
use crate::tag::kind::TagKind;
use crate::tag::value::Value;

use super::element::{ElementMut, IterMut};

/// A list of tags of a single kind.
///
/// The element kind is either declared at construction or fixed by the first
/// successful [`push`](TagList::push). Once fixed it is never reset, even when
/// the list is emptied again.
///
/// Iterators borrow the list, so structural mutation while an iterator is
/// alive is rejected at compile time.
#[derive(Debug, Clone, Default)]
pub struct TagList {
    element_kind: Option<TagKind>,
    tags: Vec<Value>,
    max_len: Option<usize>,
}

impl TagList {
    /// Create an empty list whose element kind is not yet determined
    pub fn new() -> Self {
        TagList {
            element_kind: None,
            tags: Vec::new(),
            max_len: None,
        }
    }

    /// Create an empty list with a declared element kind.
    ///
    /// `TagKind::Null` declares nothing and yields an undetermined list.
    pub fn with_kind(kind: TagKind) -> Self {
        TagList {
            element_kind: declared(kind),
            ..Self::new()
        }
    }

    /// Create an empty list with a declared kind and the limits in `config`
    pub fn with_config(kind: TagKind, config: &ListConfig) -> Self {
        TagList {
            element_kind: declared(kind),
            tags: Vec::with_capacity(config.initial_capacity),
            max_len: config.max_len,
        }
    }

    /// Build a list from a batch of values, inferring the kind from the first.
    ///
    /// Fails with [`NbtError::TypeMismatch`] if any value is `Null` or differs
    /// in kind from the first one. An empty batch yields an undetermined list.
    pub fn from_values<I>(values: I) -> NbtResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let tags: Vec<Value> = values.into_iter().collect();
        let kind = match tags.first() {
            Some(first) => first.kind(),
            None => return Ok(Self::new()),
        };

        if let Some(bad) = tags.iter().find(|v| v.is_null() || v.kind() != kind) {
            let expected = declared(kind);
            debug!(expected = ?expected, found = %bad.kind(), "rejected literal batch of mixed kinds");
            return Err(NbtError::TypeMismatch {
                expected,
                found: bad.kind(),
            });
        }

        Ok(Self::from_parts(kind, tags))
    }

    /// Assemble a list from values already known to be of `kind`
    pub(super) fn from_parts(kind: TagKind, tags: Vec<Value>) -> Self {
        debug_assert!(tags.iter().all(|v| v.kind() == kind));
        TagList {
            element_kind: declared(kind),
            tags,
            max_len: None,
        }
    }

    /// Element kind, or `None` while undetermined
    pub fn element_kind(&self) -> Option<TagKind> {
        self.element_kind
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub fn get(&self, index: usize) -> NbtResult<&Value> {
        let len = self.tags.len();
        self.tags
            .get(index)
            .ok_or(NbtError::OutOfRange { index, len })
    }

    /// Mutable access to one element. The returned handle can edit the
    /// payload in place or replace it with a value of the same kind.
    pub fn get_mut(&mut self, index: usize) -> NbtResult<ElementMut<'_>> {
        let len = self.tags.len();
        self.tags
            .get_mut(index)
            .map(ElementMut::new)
            .ok_or(NbtError::OutOfRange { index, len })
    }

    pub fn first(&self) -> Option<&Value> {
        self.tags.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.tags.last()
    }

    /// Replace the element at `index`, dropping the previous one
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> NbtResult<()> {
        let value = value.into();
        let len = self.tags.len();
        if index >= len {
            return Err(NbtError::OutOfRange { index, len });
        }
        self.check_kind(value.kind())?;
        self.tags[index] = value;
        Ok(())
    }

    /// Append a value.
    ///
    /// An undetermined list adopts the kind of the first value pushed.
    /// `Null` values are always rejected.
    #[doc(alias = "append")]
    pub fn push(&mut self, value: impl Into<Value>) -> NbtResult<()> {
        let value = value.into();
        let found = value.kind();

        if found.is_null() {
            return Err(self.mismatch(found));
        }
        if let Some(kind) = self.element_kind {
            if kind != found {
                return Err(self.mismatch(found));
            }
        }
        if let Some(limit) = self.max_len {
            if self.tags.len() >= limit {
                return Err(NbtError::LengthLimit { limit });
            }
        }

        if self.element_kind.is_none() {
            trace!(kind = %found, "list element kind fixed by first push");
            self.element_kind = Some(found);
        }
        self.tags.push(value);
        Ok(())
    }

    /// Remove the last element. Does nothing on an empty list.
    #[doc(alias = "remove_last")]
    pub fn pop(&mut self) -> Option<Value> {
        self.tags.pop()
    }

    /// Remove all elements, keeping the element kind
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.tags.reserve(additional);
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.tags
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.tags.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self.tags.iter_mut())
    }

    /// Kind gate for replacing an existing element
    fn check_kind(&self, found: TagKind) -> NbtResult<()> {
        if found.is_null() || self.element_kind != Some(found) {
            return Err(self.mismatch(found));
        }
        Ok(())
    }

    fn mismatch(&self, found: TagKind) -> NbtError {
        debug!(expected = ?self.element_kind, found = %found, "rejected tag of mismatched kind");
        NbtError::TypeMismatch {
            expected: self.element_kind,
            found,
        }
    }
}

fn declared(kind: TagKind) -> Option<TagKind> {
    if kind.is_null() {
        None
    } else {
        Some(kind)
    }
}

/// Empty lists are equal whatever their declared kinds; non-empty lists
/// must agree on kind and on every element.
impl PartialEq for TagList {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        self.element_kind == other.element_kind && self.tags == other.tags
    }
}

impl Index<usize> for TagList {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.tags[index]
    }
}

impl TryFrom<Vec<Value>> for TagList {
    type Error = NbtError;

    fn try_from(values: Vec<Value>) -> NbtResult<Self> {
        TagList::from_values(values)
    }
}

impl IntoIterator for TagList {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a mut TagList {
    type Item = ElementMut<'a>;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
