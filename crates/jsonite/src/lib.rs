//! Small embeddable JSON library.
//!
//! The whole API hangs off one type: [`Value`], a tagged union over null,
//! booleans, `f64` numbers, strings, arrays, and objects with sorted keys.
//! Around it sit a recursive-descent parser ([`parse`], [`parse_multi`])
//! with an optional comment dialect, a canonical compact serializer
//! ([`dump`]), and a conversion protocol ([`ToValue`] plus the `From` and
//! `FromIterator` family) for building values out of ordinary Rust data.
//!
//! Accessors never panic: asking an array for its `number_value` returns
//! `0.0`, indexing a scalar returns null. Code that needs to distinguish
//! "absent" from "present but null" checks [`Value::kind`] or
//! [`Value::get`] first.
//!
//! `Value` is plain owned data. Clones are deep, and sharing across
//! threads works the same as for any `Send + Sync` type.
//!
//! # Example
//!
//! ```
//! use jsonite::{parse, ParseMode};
//!
//! let config = parse(
//!     r#"{
//!         "name": "svc", // inline note
//!         "ports": [8080, 8081]
//!     }"#,
//!     ParseMode::Comments,
//! )?;
//! assert_eq!(config["name"].string_value(), "svc");
//! assert_eq!(config["ports"][0].int_value(), 8080);
//! assert_eq!(config.dump(), r#"{"name":"svc","ports":[8080,8081]}"#);
//! # Ok::<(), jsonite::ParseError>(())
//! ```

mod convert;
mod decoder;
mod encoder;
mod error;
mod value;

pub use convert::ToValue;
pub use decoder::{parse, parse_multi, ParseMode};
pub use encoder::dump;
pub use error::{MultiParseError, ParseError, ShapeError};
pub use value::{Kind, Value};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn dump_agrees_with_serde_json() {
        let v: Value = vec![
            ("k1", Value::from("v1")),
            ("k2", Value::from(42.0)),
            ("k3", Value::from(vec![Value::Null, Value::Bool(true)])),
        ]
        .into_iter()
        .collect();
        let round: serde_json::Value = serde_json::from_str(&v.dump()).unwrap();
        assert_eq!(round, json!({"k1": "v1", "k2": 42, "k3": [null, true]}));
    }

    #[test]
    fn parses_serde_json_output() {
        let doc = json!({
            "flag": false,
            "nested": {"deep": [1, 2, {"leaf": "🦀"}]},
        });
        let text = serde_json::to_string(&doc).unwrap();
        let v = parse(&text, ParseMode::Strict).unwrap();
        assert_eq!(v["nested"]["deep"][2]["leaf"].string_value(), "🦀");
        assert_eq!(v["flag"], Value::Bool(false));

        let round: serde_json::Value = serde_json::from_str(&v.dump()).unwrap();
        assert_eq!(round, doc);
    }

    #[test]
    fn multi_document_stream() {
        let values = parse_multi("{\"a\": 1}\n{\"a\": 2}\n", ParseMode::Strict).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["a"].number_value(), 2.0);
    }

    #[test]
    fn fromstr_and_display_round_trip() {
        let v: Value = r#"{"b":[1,2],"a":null}"#.parse().unwrap();
        assert_eq!(v.to_string(), r#"{"a":null,"b":[1,2]}"#);
    }
}
