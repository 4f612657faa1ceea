//! serde support
//!
//! Values serialize as their bare payloads: lists and arrays as sequences,
//! compounds as maps, `Null` as unit. Element kinds are not written.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::list::TagList;

use super::compound::Compound;
use super::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::ByteArray(items) => items.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => list.serialize(serializer),
            Value::Compound(compound) => compound.serialize(serializer),
            Value::IntArray(items) => items.serialize(serializer),
        }
    }
}

impl Serialize for TagList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag_list;

    #[test]
    fn lists_serialize_as_sequences() {
        let list = tag_list![1i32, 2, 3];
        assert_eq!(serde_json::to_string(&list).expect("serialize"), "[1,2,3]");
    }

    #[test]
    fn nested_compound_serializes_as_map() {
        let mut c = Compound::new();
        c.insert("name", "zombie");
        c.insert("pos", tag_list![1.5f64, 64.0, -2.0]);
        let json = serde_json::to_string(&Value::from(c)).expect("serialize");
        assert_eq!(json, r#"{"name":"zombie","pos":[1.5,64.0,-2.0]}"#);
    }

    #[test]
    fn null_serializes_as_unit() {
        assert_eq!(serde_json::to_string(&Value::Null).expect("serialize"), "null");
    }
}
