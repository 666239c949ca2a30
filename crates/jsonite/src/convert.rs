//! Conversions from host types into [`Value`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::value::Value;

/// Types that can produce a JSON [`Value`].
///
/// This is the extension hook for user-defined types. Containers of
/// implementors convert structurally: sequences become arrays in element
/// order, sets become arrays normalized to canonical order, and string-keyed
/// maps become objects, so equal contents yield equal values no matter which
/// container supplied them.
///
/// # Example
///
/// ```
/// use jsonite::{ToValue, Value};
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl ToValue for Point {
///     fn to_value(&self) -> Value {
///         Value::from(vec![self.x, self.y])
///     }
/// }
///
/// let segment = vec![Point { x: 0.0, y: 0.0 }, Point { x: 3.0, y: 4.0 }];
/// assert_eq!(segment.to_value().dump(), "[[0,0],[3,4]]");
/// ```
pub trait ToValue {
    /// Builds the [`Value`] representation of `self`.
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Number(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for LinkedList<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Array(normalized(self.iter().map(ToValue::to_value).collect()))
    }
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        Value::Array(normalized(self.iter().map(ToValue::to_value).collect()))
    }
}

impl<K: AsRef<str>, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: AsRef<str>, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.to_value()))
                .collect(),
        )
    }
}

/// Sets have no meaningful element order, so their arrays are normalized
/// to the Value total order. Equal element sets from any set type collapse
/// to the same array.
fn normalized(mut items: Vec<Value>) -> Vec<Value> {
    items.sort();
    items
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

macro_rules! number_impls {
    ($($t:ty)*) => {$(
        impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Number(*self as f64)
            }
        }

        impl From<$t> for Value {
            fn from(n: $t) -> Value {
                Value::Number(n as f64)
            }
        }
    )*};
}

number_impls!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32);

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Value {
        Value::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<VecDeque<T>> for Value {
    fn from(items: VecDeque<T>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<LinkedList<T>> for Value {
    fn from(items: LinkedList<T>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(items: BTreeSet<T>) -> Value {
        Value::Array(normalized(items.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Value>, S> From<HashSet<T, S>> for Value {
    fn from(items: HashSet<T, S>) -> Value {
        Value::Array(normalized(items.into_iter().map(Into::into).collect()))
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(entries: HashMap<K, V, S>) -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Collects elements into an array value.
///
/// ```
/// use jsonite::Value;
///
/// let v: Value = (1..=3).collect();
/// assert_eq!(v.dump(), "[1,2,3]");
/// ```
impl<T: ToValue> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Value {
        Value::Array(iter.into_iter().map(|item| item.to_value()).collect())
    }
}

/// Collects key/value pairs into an object value. Duplicate keys keep the
/// last occurrence.
///
/// ```
/// use jsonite::Value;
///
/// let v: Value = vec![("b", 2), ("a", 1)].into_iter().collect();
/// assert_eq!(v.dump(), r#"{"a":1,"b":2}"#);
/// ```
impl<K: Into<String>, V: ToValue> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Value {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_equivalence_matrix() {
        let from_vec = Value::from(vec![1, 2, 3]);
        let from_deque = Value::from(VecDeque::from([1, 2, 3]));
        let from_list = Value::from(LinkedList::from([1, 2, 3]));
        let from_slice = Value::from(&[1, 2, 3][..]);
        let from_btree_set = Value::from(BTreeSet::from([3, 1, 2]));
        let from_hash_set = Value::from(HashSet::from([2, 3, 1]));

        assert_eq!(from_vec, from_deque);
        assert_eq!(from_vec, from_list);
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, from_btree_set);
        assert_eq!(from_vec, from_hash_set);
    }

    #[test]
    fn map_equivalence_matrix() {
        let mut bt = BTreeMap::new();
        bt.insert("k1".to_owned(), 1);
        bt.insert("k2".to_owned(), 2);
        let mut hm = HashMap::new();
        hm.insert("k2", 2);
        hm.insert("k1", 1);

        let from_btree = Value::from(bt.clone());
        let from_hash = Value::from(hm);
        assert_eq!(from_btree, from_hash);
        assert_eq!(from_btree, bt.to_value());

        let keys: Vec<&str> = from_hash
            .object_items()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["k1", "k2"]);
    }

    #[test]
    fn numeric_conversion_matrix() {
        assert_eq!(Value::from(42), Value::from(42.0));
        assert_eq!(Value::from(42u8), Value::from(42i64));
        assert_ne!(Value::from(42), Value::from(42.1));
        assert_eq!(7u32.to_value(), Value::Number(7.0));
    }

    #[test]
    fn option_and_refs() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_owned()));
        assert_eq!(Some(1).to_value(), Value::Number(1.0));

        let s = String::from("owned");
        assert_eq!((&s).to_value(), Value::String("owned".to_owned()));
    }

    #[test]
    fn collect_matrix() {
        let arr: Value = ["a", "b"].iter().collect();
        assert_eq!(
            arr,
            Value::Array(vec![
                Value::String("a".to_owned()),
                Value::String("b".to_owned()),
            ])
        );

        let obj: Value = vec![("dup", 1), ("dup", 2)].into_iter().collect();
        assert_eq!(obj["dup"], Value::Number(2.0));
    }

    #[test]
    fn user_type_protocol() {
        struct Temperature {
            celsius: f64,
        }

        impl ToValue for Temperature {
            fn to_value(&self) -> Value {
                self.celsius.to_value()
            }
        }

        let readings = vec![Temperature { celsius: 1.5 }, Temperature { celsius: -4.0 }];
        assert_eq!(
            readings.to_value(),
            Value::Array(vec![Value::Number(1.5), Value::Number(-4.0)])
        );
    }

    #[test]
    fn nested_containers() {
        let grid = vec![vec![1, 2], vec![3]];
        let v = grid.to_value();
        assert_eq!(v[0][1], Value::Number(2.0));
        assert_eq!(v[1][0], Value::Number(3.0));
        assert_eq!(v[1][1], Value::Null);
    }
}
