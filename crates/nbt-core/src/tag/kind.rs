//! Tag Kind Definitions
//!
//! Defines the closed set of tag kinds in the NBT model.
//! Kind ids match the NBT wire ids and are an eternal contract.

use std::fmt;

/// Tag kinds
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagKind {
    // Absent value (TAG_End on the wire)
    Null = 0x00,

    // Scalars
    Byte   = 0x01,
    Short  = 0x02,
    Int    = 0x03,
    Long   = 0x04,
    Float  = 0x05,
    Double = 0x06,

    // Arrays and containers
    ByteArray = 0x07,
    String    = 0x08,
    List      = 0x09,
    Compound  = 0x0A,
    IntArray  = 0x0B,
}

impl TagKind {
    /// Every kind in id order
    pub const ALL: [TagKind; 12] = [
        TagKind::Null,
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::ByteArray,
        TagKind::String,
        TagKind::List,
        TagKind::Compound,
        TagKind::IntArray,
    ];

    /// Convert raw id byte to kind
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0x00 => Some(TagKind::Null),

            0x01 => Some(TagKind::Byte),
            0x02 => Some(TagKind::Short),
            0x03 => Some(TagKind::Int),
            0x04 => Some(TagKind::Long),
            0x05 => Some(TagKind::Float),
            0x06 => Some(TagKind::Double),

            0x07 => Some(TagKind::ByteArray),
            0x08 => Some(TagKind::String),
            0x09 => Some(TagKind::List),
            0x0A => Some(TagKind::Compound),
            0x0B => Some(TagKind::IntArray),

            _ => None,
        }
    }

    /// Raw id byte
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Whether this is the absent kind
    pub fn is_null(self) -> bool {
        self == TagKind::Null
    }

    pub fn name(self) -> &'static str {
        match self {
            TagKind::Null => "TAG_End",
            TagKind::Byte => "TAG_Byte",
            TagKind::Short => "TAG_Short",
            TagKind::Int => "TAG_Int",
            TagKind::Long => "TAG_Long",
            TagKind::Float => "TAG_Float",
            TagKind::Double => "TAG_Double",
            TagKind::ByteArray => "TAG_Byte_Array",
            TagKind::String => "TAG_String",
            TagKind::List => "TAG_List",
            TagKind::Compound => "TAG_Compound",
            TagKind::IntArray => "TAG_Int_Array",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for kind in TagKind::ALL {
            assert_eq!(TagKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(TagKind::from_id(0x0C), None);
        assert_eq!(TagKind::from_id(0xFF), None);
    }

    #[test]
    fn only_null_is_null() {
        let nulls: Vec<_> = TagKind::ALL.iter().filter(|k| k.is_null()).collect();
        assert_eq!(nulls, vec![&TagKind::Null]);
    }
}
