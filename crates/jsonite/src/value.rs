//! The JSON [`Value`] type and its accessors.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops;

use crate::error::ShapeError;

static NULL: Value = Value::Null;
static EMPTY_OBJECT: BTreeMap<String, Value> = BTreeMap::new();

/// The kind of a [`Value`]. Variant order is the tag order used to break
/// ties when values of different kinds are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

/// One JSON value.
///
/// Values are plain data: cloning is deep, equality and ordering are
/// structural, and nothing is mutated after construction. Object entries
/// live in a [`BTreeMap`], so key order is always canonical (sorted)
/// regardless of which container or document the value came from.
///
/// Accessors never fail: asking for the wrong kind yields a documented
/// default, and indexing out of range yields [`Value::Null`].
///
/// # Example
///
/// ```
/// use jsonite::Value;
///
/// let v = Value::from(vec![1, 2, 3]);
/// assert_eq!(v[0].number_value(), 1.0);
/// assert_eq!(v[9], Value::Null);
/// assert_eq!(v["no-object"].string_value(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// The [`Kind`] tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Boolean payload, or `false` for any other kind.
    pub fn boolean_value(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    /// Numeric payload, or `0.0` for any other kind.
    pub fn number_value(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Numeric payload truncated to an integer, or `0` for any other kind.
    ///
    /// The cast saturates at the `i64` range and maps NaN to `0`.
    pub fn int_value(&self) -> i64 {
        self.number_value() as i64
    }

    /// String payload, or `""` for any other kind.
    pub fn string_value(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    /// Array elements, or an empty slice for any other kind.
    pub fn array_items(&self) -> &[Value] {
        match self {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    /// Object entries in canonical key order, or an empty map for any
    /// other kind.
    pub fn object_items(&self) -> &BTreeMap<String, Value> {
        match self {
            Value::Object(items) => items,
            _ => &EMPTY_OBJECT,
        }
    }

    /// Looks up an object key, `None` when absent or not an object.
    ///
    /// Unlike `value[key]`, this distinguishes an absent key from an
    /// explicit null.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(items) => items.get(key),
            _ => None,
        }
    }

    /// Looks up an array element, `None` when out of range or not an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Checks that this value is an object whose entries match `shape`.
    ///
    /// Each `(key, kind)` pair requires the key to be present with exactly
    /// that kind. Extra keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonite::{parse, Kind, ParseMode};
    ///
    /// let v = parse(r#"{"id": 7, "name": "deck"}"#, ParseMode::Strict).unwrap();
    /// assert!(v.has_shape(&[("id", Kind::Number), ("name", Kind::String)]).is_ok());
    /// assert!(v.has_shape(&[("id", Kind::String)]).is_err());
    /// ```
    pub fn has_shape(&self, shape: &[(&str, Kind)]) -> Result<(), ShapeError> {
        let items = match self {
            Value::Object(items) => items,
            _ => return Err(ShapeError::NotAnObject(self.kind())),
        };
        for (key, expected) in shape {
            match items.get(*key) {
                None => {
                    return Err(ShapeError::MissingKey {
                        key: (*key).to_owned(),
                    })
                }
                Some(value) if value.kind() != *expected => {
                    return Err(ShapeError::Mismatch {
                        key: (*key).to_owned(),
                        expected: *expected,
                        found: value.kind(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Numbers with the same numeric value are equal regardless of how they
/// were written or constructed; NaN payloads equal each other so that
/// equality stays consistent with the total order.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order: tag ordinal first, then payload. Numbers order by value
/// with NaN after everything else; arrays and strings are lexicographic;
/// objects compare entry lists key-then-value.
impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => cmp_number(*a, *b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Object(a), Value::Object(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

fn cmp_number(a: f64, b: f64) -> Ordering {
    // partial_cmp is None only when a NaN is involved.
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

impl ops::Index<usize> for Value {
    type Output = Value;

    /// Total array indexing: out-of-range or non-array yields `Null`.
    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    /// Total object indexing: missing key or non-object yields `Null`.
    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(items) => items.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accessor_matrix() {
        let s = Value::String("a".to_owned());
        assert_eq!(s.number_value(), 0.0);
        assert_eq!(s.int_value(), 0);
        assert_eq!(s.string_value(), "a");
        assert!(!s.boolean_value());
        assert!(s.array_items().is_empty());
        assert!(s.object_items().is_empty());

        let null = Value::default();
        assert!(null.is_null());
        assert_eq!(null.number_value(), 0.0);
        assert_eq!(null.string_value(), "");
    }

    #[test]
    fn numeric_equality_matrix() {
        assert_eq!(Value::Number(42.0), Value::Number(42.0));
        assert_ne!(Value::Number(42.0), Value::Number(42.1));
        assert_eq!(Value::Number(0.0), Value::Number(-0.0));
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
    }

    #[test]
    fn total_order_matrix() {
        let mut values = vec![
            Value::Object(BTreeMap::new()),
            Value::String("a".to_owned()),
            Value::Number(1.0),
            Value::Bool(true),
            Value::Bool(false),
            Value::Array(vec![]),
            Value::Null,
            Value::Number(f64::NAN),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(false),
                Value::Bool(true),
                Value::Number(1.0),
                Value::Number(f64::NAN),
                Value::String("a".to_owned()),
                Value::Array(vec![]),
                Value::Object(BTreeMap::new()),
            ]
        );

        assert!(Value::Array(vec![Value::Number(1.0)]) < Value::Array(vec![Value::Number(2.0)]));
        assert!(Value::String("ab".to_owned()) < Value::String("b".to_owned()));
    }

    #[test]
    fn index_is_total() {
        let mut items = BTreeMap::new();
        items.insert("a".to_owned(), Value::Number(1.0));
        let obj = Value::Object(items);

        assert_eq!(obj["a"], Value::Number(1.0));
        assert_eq!(obj["missing"], Value::Null);
        assert_eq!(obj["missing"]["deeper"], Value::Null);
        assert_eq!(obj[0], Value::Null);

        let arr = Value::Array(vec![Value::Bool(true)]);
        assert_eq!(arr[0], Value::Bool(true));
        assert_eq!(arr[1], Value::Null);
        assert_eq!(arr["key"], Value::Null);

        assert_eq!(obj.get("a"), Some(&Value::Number(1.0)));
        assert_eq!(obj.get("missing"), None);
        assert_eq!(arr.get_index(1), None);
    }

    #[test]
    fn shape_check_matrix() {
        let mut items = BTreeMap::new();
        items.insert("k1".to_owned(), Value::String("v1".to_owned()));
        items.insert("k2".to_owned(), Value::Number(42.0));
        items.insert("k3".to_owned(), Value::Array(vec![]));
        let obj = Value::Object(items);

        assert!(obj
            .has_shape(&[
                ("k1", Kind::String),
                ("k2", Kind::Number),
                ("k3", Kind::Array),
            ])
            .is_ok());
        assert_eq!(
            obj.has_shape(&[("k1", Kind::Number)]),
            Err(ShapeError::Mismatch {
                key: "k1".to_owned(),
                expected: Kind::Number,
                found: Kind::String,
            })
        );
        assert_eq!(
            obj.has_shape(&[("k4", Kind::Null)]),
            Err(ShapeError::MissingKey {
                key: "k4".to_owned(),
            })
        );
        assert_eq!(
            Value::Null.has_shape(&[]),
            Err(ShapeError::NotAnObject(Kind::Null))
        );
    }

    #[test]
    fn value_is_plain_data() {
        fn assert_plain<T: Clone + Send + Sync + Default>() {}
        assert_plain::<Value>();
    }
}
