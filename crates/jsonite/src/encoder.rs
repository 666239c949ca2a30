//! Compact canonical JSON serializer.

use std::fmt;

use crate::value::Value;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Serializes `value` to its compact canonical form.
///
/// No whitespace is emitted, object keys appear in sorted order, and the
/// output parses back to an equal [`Value`].
///
/// # Example
///
/// ```
/// use jsonite::{dump, Value};
///
/// let v: Value = vec![("b", 2), ("a", 1)].into_iter().collect();
/// assert_eq!(dump(&v), r#"{"a":1,"b":2}"#);
/// ```
pub fn dump(value: &Value) -> String {
    value.dump()
}

impl Value {
    /// Serializes `self` to its compact canonical form.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_to(&mut out);
        out
    }

    /// Appends the compact serialization of `self` to `out`.
    pub fn dump_to(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(true) => out.push_str("true"),
            Value::Bool(false) => out.push_str("false"),
            Value::Number(n) => dump_number(*n, out),
            Value::String(s) => dump_string(s, out),
            Value::Array(items) => {
                out.push('[');
                let mut first = true;
                for item in items {
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    item.dump_to(out);
                }
                out.push(']');
            }
            Value::Object(items) => {
                out.push('{');
                let mut first = true;
                for (key, value) in items {
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    dump_string(key, out);
                    out.push(':');
                    value.dump_to(out);
                }
                out.push('}');
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

/// Non-finite numbers have no JSON form and serialize as `null`.
fn dump_number(n: f64, out: &mut String) {
    if n.is_finite() {
        out.push_str(&n.to_string());
    } else {
        out.push_str("null");
    }
}

fn dump_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                let code = ch as u32;
                out.push_str("\\u00");
                out.push(HEX[(code >> 4) as usize] as char);
                out.push(HEX[(code & 0xf) as usize] as char);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
