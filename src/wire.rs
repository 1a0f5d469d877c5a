//! Wire codec - hand-rolled JSON subset shared by both services
//!
//! Handles flat objects and arrays of flat objects. Values are carried as raw
//! strings; callers convert to int/Decimal as needed. Nested objects are not
//! supported and are rejected on decode. Array values survive intact as raw
//! `[...]` substrings; only the order-request path consumes them.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::money;

/// Decode errors for the wire format
#[derive(Debug, Error)]
pub enum WireError {
    /// The request body has no top-level `[...]` span to extract
    #[error("Invalid request body")]
    MalformedRequest,

    /// A value shape the codec does not support (nested objects)
    #[error("Unsupported value shape: {0}")]
    UnsupportedShape(String),
}

// ============================================================
// Decoding
// ============================================================

/// Parse a flat object into a key -> raw-value map.
///
/// One layer of quotes is stripped from quoted keys and values. Escape
/// sequences inside values pass through literally. Pairs without a `:` are
/// skipped (and logged); an object with no recognizable pairs decodes to an
/// empty map.
pub fn decode_object(input: &str) -> Result<FxHashMap<String, String>, WireError> {
    let mut body = input.trim();
    body = body.strip_prefix('{').unwrap_or(body);
    body = body.strip_suffix('}').unwrap_or(body);
    let body = body.trim();

    let mut fields = FxHashMap::default();
    if body.is_empty() {
        return Ok(fields);
    }

    for pair in split_top_level(body) {
        let Some(colon) = find_separator(pair) else {
            tracing::warn!("skipping malformed pair on wire: {:?}", pair);
            continue;
        };
        let key = strip_quotes(pair[..colon].trim());
        let value = pair[colon + 1..].trim();

        if value.starts_with('{') {
            return Err(WireError::UnsupportedShape(format!(
                "nested object in field '{}'",
                key
            )));
        }

        // Arrays stay raw; scalars lose one quote layer.
        let value = if value.starts_with('[') {
            value.to_string()
        } else {
            strip_quotes(value)
        };
        fields.insert(key, value);
    }
    Ok(fields)
}

/// Parse an array of flat objects.
pub fn decode_array(input: &str) -> Result<Vec<FxHashMap<String, String>>, WireError> {
    let mut body = input.trim();
    body = body.strip_prefix('[').unwrap_or(body);
    body = body.strip_suffix(']').unwrap_or(body);
    let body = body.trim();

    let mut objects = Vec::new();
    if body.is_empty() {
        return Ok(objects);
    }
    for span in split_objects(body) {
        objects.push(decode_object(span)?);
    }
    Ok(objects)
}

/// Extract and parse the items array from an order-request body.
///
/// The body is expected to look like `{"items":[{...},{...}]}`; everything
/// outside the first `[` and last `]` is ignored.
pub fn extract_request_items(body: &str) -> Result<Vec<FxHashMap<String, String>>, WireError> {
    let trimmed = body.trim();
    let start = trimmed.find('[');
    let end = trimmed.rfind(']');
    match (start, end) {
        (Some(start), Some(end)) if end > start => decode_array(&trimmed[start..=end]),
        _ => Err(WireError::MalformedRequest),
    }
}

/// Remove exactly one layer of surrounding double quotes, if present.
fn strip_quotes(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

/// Split on top-level commas: commas inside quotes or inside `[...]`/`{...}`
/// spans are not separators.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut prev = '\0';
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if c == '"' && prev != '\\' {
            in_quotes = !in_quotes;
        } else if !in_quotes {
            match c {
                '[' | '{' => depth += 1,
                ']' | '}' => depth -= 1,
                ',' if depth == 0 => {
                    parts.push(&input[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        prev = c;
    }
    if start < input.len() {
        parts.push(&input[start..]);
    }
    parts
}

/// Split a run of concatenated objects (`{..},{..}`) at brace boundaries,
/// tracking depth so nested spans stay intact.
fn split_objects(input: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut in_quotes = false;
    let mut prev = '\0';
    let mut depth = 0i32;
    let mut start = None;

    for (i, c) in input.char_indices() {
        if c == '"' && prev != '\\' {
            in_quotes = !in_quotes;
        } else if !in_quotes {
            match c {
                '{' => {
                    if depth == 0 {
                        start = Some(i);
                    }
                    depth += 1;
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(s) = start.take() {
                            objects.push(&input[s..=i]);
                        }
                    }
                }
                _ => {}
            }
        }
        prev = c;
    }
    objects
}

/// Find the first key/value separator outside quotes.
fn find_separator(pair: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut prev = '\0';
    for (i, c) in pair.char_indices() {
        if c == '"' && prev != '\\' {
            in_quotes = !in_quotes;
        } else if c == ':' && !in_quotes {
            return Some(i);
        }
        prev = c;
    }
    None
}

// ============================================================
// Encoding
// ============================================================

/// Builder for a flat wire object with typed fields.
///
/// Field order is emission order. String values are escaped; monetary values
/// are emitted with exactly two fractional digits (half-up).
pub struct ObjectEncoder {
    buf: String,
}

impl ObjectEncoder {
    pub fn new() -> Self {
        Self {
            buf: String::from("{"),
        }
    }

    fn key(&mut self, key: &str) {
        if self.buf.len() > 1 {
            self.buf.push(',');
        }
        self.buf.push('"');
        self.buf.push_str(key);
        self.buf.push_str("\":");
    }

    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.key(key);
        self.buf.push('"');
        self.buf.push_str(&escape(value));
        self.buf.push('"');
        self
    }

    pub fn uint(mut self, key: &str, value: u64) -> Self {
        self.key(key);
        self.buf.push_str(&value.to_string());
        self
    }

    pub fn amount(mut self, key: &str, value: Decimal) -> Self {
        self.key(key);
        self.buf.push_str(&money::format_amount(value));
        self
    }

    /// Append a pre-encoded value (an array of objects) verbatim.
    pub fn raw(mut self, key: &str, value: &str) -> Self {
        self.key(key);
        self.buf.push_str(value);
        self
    }

    pub fn finish(mut self) -> String {
        self.buf.push('}');
        self.buf
    }
}

impl Default for ObjectEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode pre-encoded objects as an array.
pub fn encode_array<I>(objects: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut buf = String::from("[");
    for (i, obj) in objects.into_iter().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        buf.push_str(&obj);
    }
    buf.push(']');
    buf
}

/// Standard error body: `{"error":"<message>"}`.
pub fn error_body(message: &str) -> String {
    ObjectEncoder::new().string("error", message).finish()
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn decode_flat_object() {
        let fields = decode_object(r#"{"id":3,"name":"Keyboard","price":74.99}"#).unwrap();
        assert_eq!(fields.get("id").map(String::as_str), Some("3"));
        assert_eq!(fields.get("name").map(String::as_str), Some("Keyboard"));
        assert_eq!(fields.get("price").map(String::as_str), Some("74.99"));
    }

    #[test]
    fn decode_keeps_commas_inside_quotes() {
        let fields = decode_object(r#"{"name":"Mouse, wireless","price":24.99}"#).unwrap();
        assert_eq!(
            fields.get("name").map(String::as_str),
            Some("Mouse, wireless"),
            "comma inside a quoted value must not split the pair"
        );
        assert_eq!(fields.get("price").map(String::as_str), Some("24.99"));
    }

    #[test]
    fn decode_strips_one_quote_layer_only() {
        let fields = decode_object(r#"{"a":"\"quoted\""}"#).unwrap();
        // Escapes pass through literally; only the outer layer is removed.
        assert_eq!(fields.get("a").map(String::as_str), Some(r#"\"quoted\""#));
    }

    #[test]
    fn decode_empty_object_is_empty_map() {
        assert!(decode_object("{}").unwrap().is_empty());
        assert!(decode_object("  {  }  ").unwrap().is_empty());
    }

    #[test]
    fn decode_skips_malformed_pairs() {
        let fields = decode_object(r#"{garbage,"id":7}"#).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("id").map(String::as_str), Some("7"));
    }

    #[test]
    fn decode_object_with_no_pairs_is_empty_not_error() {
        let fields = decode_object("{not json at all}").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn decode_rejects_nested_objects() {
        let err = decode_object(r#"{"meta":{"a":1}}"#).unwrap_err();
        assert!(matches!(err, WireError::UnsupportedShape(_)));
    }

    #[test]
    fn decode_carries_array_values_raw() {
        let fields =
            decode_object(r#"{"orderId":"ORD-1","items":[{"productId":1},{"productId":3}],"total":2074.97}"#)
                .unwrap();
        assert_eq!(fields.get("orderId").map(String::as_str), Some("ORD-1"));
        assert_eq!(fields.get("total").map(String::as_str), Some("2074.97"));
        let items = decode_array(fields.get("items").unwrap()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].get("productId").map(String::as_str), Some("3"));
    }

    #[test]
    fn decode_array_of_objects() {
        let objs = decode_array(r#"[{"productId":1,"quantity":2},{"productId":3,"quantity":1}]"#)
            .unwrap();
        assert_eq!(objs.len(), 2);
        assert_eq!(objs[0].get("quantity").map(String::as_str), Some("2"));
        assert_eq!(objs[1].get("productId").map(String::as_str), Some("3"));
    }

    #[test]
    fn decode_empty_array() {
        assert!(decode_array("[]").unwrap().is_empty());
    }

    #[test]
    fn extract_items_from_request_body() {
        let items =
            extract_request_items(r#"{"items":[{"productId":1,"quantity":2}]}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get("productId").map(String::as_str), Some("1"));
    }

    #[test]
    fn extract_items_empty_array() {
        assert!(extract_request_items(r#"{"items":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn extract_items_without_array_is_malformed() {
        let err = extract_request_items(r#"{"items": 3}"#).unwrap_err();
        assert!(matches!(err, WireError::MalformedRequest));
        assert_eq!(err.to_string(), "Invalid request body");
    }

    #[test]
    fn encoder_escapes_control_characters() {
        let body = ObjectEncoder::new()
            .string("name", "line\nbreak \"and\" tab\t\\")
            .finish();
        assert_eq!(body, r#"{"name":"line\nbreak \"and\" tab\t\\"}"#);
        // Oracle: the escaped output must be valid JSON.
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["name"], "line\nbreak \"and\" tab\t\\");
    }

    #[test]
    fn encoder_formats_amounts_with_two_decimals() {
        let price = Decimal::from_str("999.99").unwrap();
        let body = ObjectEncoder::new()
            .uint("id", 1)
            .string("name", "Laptop")
            .amount("price", price)
            .finish();
        assert_eq!(body, r#"{"id":1,"name":"Laptop","price":999.99}"#);

        let doubled = price * Decimal::from(2);
        let body = ObjectEncoder::new().amount("subtotal", doubled).finish();
        assert_eq!(
            body, r#"{"subtotal":1999.98}"#,
            "no binary floating-point artifacts on the wire"
        );
    }

    #[test]
    fn encode_array_joins_objects() {
        let body = encode_array(vec!["{\"a\":1}".to_string(), "{\"b\":2}".to_string()]);
        assert_eq!(body, r#"[{"a":1},{"b":2}]"#);
        assert_eq!(encode_array(Vec::<String>::new()), "[]");
    }

    #[test]
    fn error_body_shape() {
        assert_eq!(
            error_body("Product not found: 999"),
            r#"{"error":"Product not found: 999"}"#
        );
    }

    #[test]
    fn encoder_output_is_valid_json() {
        let body = ObjectEncoder::new()
            .string("orderId", "ORD-1")
            .raw("items", &encode_array(vec![r#"{"productId":1}"#.to_string()]))
            .amount("total", Decimal::from_str("2074.97").unwrap())
            .finish();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["orderId"], "ORD-1");
        assert_eq!(v["items"].as_array().unwrap().len(), 1);
        assert_eq!(v["total"].as_f64(), Some(2074.97));
    }
}
