//! Text rendering
//!
//! `Display` for tags in the bracketed text notation (`[1b,2b]`, `{id:3}`).
//! Output is meant for logs and diagnostics, not for round-tripping.

use std::fmt::{self, Display, Formatter, Write};

use crate::list::TagList;

use super::compound::Compound;
use super::value::Value;

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Byte(v) => write!(f, "{}b", v),
            Value::Short(v) => write!(f, "{}s", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}L", v),
            Value::Float(v) => write!(f, "{}f", v),
            Value::Double(v) => write!(f, "{}d", v),
            Value::ByteArray(items) => {
                f.write_str("[B;")?;
                write_separated(f, items.iter().map(|b| format!("{}b", b)))?;
                f.write_char(']')
            }
            Value::String(s) => write_quoted(f, s),
            Value::List(list) => Display::fmt(list, f),
            Value::Compound(compound) => Display::fmt(compound, f),
            Value::IntArray(items) => {
                f.write_str("[I;")?;
                write_separated(f, items.iter())?;
                f.write_char(']')
            }
        }
    }
}

impl Display for TagList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        write_separated(f, self.iter())?;
        f.write_char(']')
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            if is_bare_key(key) {
                f.write_str(key)?;
            } else {
                write_quoted(f, key)?;
            }
            write!(f, ":{}", value)?;
        }
        f.write_char('}')
    }
}

fn write_separated<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator,
    I::Item: Display,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_quoted(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag_list;

    #[test]
    fn scalars_carry_suffixes() {
        assert_eq!(Value::Byte(-1).to_string(), "-1b");
        assert_eq!(Value::Short(2).to_string(), "2s");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Long(4).to_string(), "4L");
        assert_eq!(Value::Float(1.5).to_string(), "1.5f");
        assert_eq!(Value::Double(0.25).to_string(), "0.25d");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(Value::from(r#"say "hi" \o/"#).to_string(), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn arrays_and_lists() {
        assert_eq!(Value::ByteArray(vec![1, 2]).to_string(), "[B;1b,2b]");
        assert_eq!(Value::IntArray(vec![]).to_string(), "[I;]");
        assert_eq!(tag_list![1i8, 2, 3].to_string(), "[1b,2b,3b]");
        assert_eq!(TagList::new().to_string(), "[]");
    }

    #[test]
    fn compounds_quote_unusual_keys() {
        let mut c = Compound::new();
        c.insert("id", 3i32);
        c.insert("display name", "Steve");
        assert_eq!(c.to_string(), r#"{"display name":"Steve",id:3}"#);
    }
}
