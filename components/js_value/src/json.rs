//! Building values from JSON

use serde_json::Value as Json;

use crate::value::JsValue;

impl JsValue {
    /// Convert a parsed JSON document into host values.
    ///
    /// Objects become plain objects with keys in document order, arrays
    /// become arrays, and numbers become doubles.
    ///
    /// # Examples
    ///
    /// ```
    /// use js_value::JsValue;
    /// use serde_json::json;
    ///
    /// let value = JsValue::from_json(&json!({"a": [1, 2], "b": null}));
    /// assert_eq!(value.own_keys(), vec!["a", "b"]);
    /// assert_eq!(value.get_str("a").get_str("length"), JsValue::number(2.0));
    /// ```
    pub fn from_json(json: &Json) -> JsValue {
        match json {
            Json::Null => JsValue::Null,
            Json::Bool(b) => JsValue::Boolean(*b),
            Json::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => JsValue::String(s.clone()),
            Json::Array(items) => JsValue::array_from(items.iter().map(JsValue::from_json).collect()),
            Json::Object(fields) => JsValue::object_from(
                fields
                    .iter()
                    .map(|(key, value)| (key.as_str(), JsValue::from_json(value))),
            ),
        }
    }

    /// Parse JSON text into host values
    pub fn parse_json(text: &str) -> Result<JsValue, serde_json::Error> {
        let json: Json = serde_json::from_str(text)?;
        Ok(JsValue::from_json(&json))
    }
}

impl From<&Json> for JsValue {
    fn from(json: &Json) -> Self {
        JsValue::from_json(json)
    }
}
