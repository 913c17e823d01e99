//! Field access over the free-form wishlist entries.
//!
//! The wishlist API returns an arbitrary JSON object per game, so lookups
//! here apply explicit defaults: missing or mistyped boolean fields read as
//! false, integers as 0, strings as "", string lists as empty.

use serde_json::{Map, Value};

/// One game's field mapping within the wishlist.
pub type Fields = Map<String, Value>;

/// Steam flags arrive as booleans or 0/1 integers depending on the field.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub fn flag_field(fields: &Fields, name: &str) -> bool {
    fields.get(name).map(truthy).unwrap_or(false)
}

/// Integer field, default 0. Digit strings parse, fractional prices
/// truncate toward zero.
pub fn int_field(fields: &Fields, name: &str) -> i64 {
    match fields.get(name) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

pub fn str_field<'a>(fields: &'a Fields, name: &str) -> &'a str {
    fields.get(name).and_then(Value::as_str).unwrap_or("")
}

/// String items of an array field such as `tags`. Missing or non-array
/// fields read as the empty list.
pub fn string_items<'a>(fields: &'a Fields, name: &str) -> Vec<&'a str> {
    fields
        .get(name)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().expect("fixture should be an object").clone()
    }

    #[test]
    fn truthy_covers_steam_flag_shapes() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("1")));
        assert!(truthy(&json!(["linux"])));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!([])));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn int_field_parses_numbers_and_digit_strings() {
        let f = fields(json!({"final": 999, "discount_percent": "50", "rank": 12.7}));
        assert_eq!(int_field(&f, "final"), 999);
        assert_eq!(int_field(&f, "discount_percent"), 50);
        assert_eq!(int_field(&f, "rank"), 12);
        assert_eq!(int_field(&f, "missing"), 0);
    }

    #[test]
    fn str_field_defaults_to_empty() {
        let f = fields(json!({"type": "Game", "final": 999}));
        assert_eq!(str_field(&f, "type"), "Game");
        assert_eq!(str_field(&f, "final"), "");
        assert_eq!(str_field(&f, "missing"), "");
    }

    #[test]
    fn string_items_reads_tags_and_defaults_to_empty() {
        let f = fields(json!({"tags": ["RPG", "Open World"], "name": "Foo"}));
        assert_eq!(string_items(&f, "tags"), vec!["RPG", "Open World"]);
        assert!(string_items(&f, "name").is_empty());
        assert!(string_items(&f, "missing").is_empty());
    }
}
