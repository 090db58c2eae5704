/* src/site/injector/rust/src/value.rs */

// JSON helpers shared by content documents: truthiness as page scripts
// see it, and text rendering of scalar values.

use serde_json::Value;

pub fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => {
      if let Some(i) = n.as_i64() {
        i != 0
      } else if let Some(f) = n.as_f64() {
        f != 0.0
      } else {
        true
      }
    }
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

/// Text for a scalar value; `None` for null, arrays and objects.
pub fn scalar_text(value: &Value) -> Option<String> {
  match value {
    Value::Null | Value::Array(_) | Value::Object(_) => None,
    Value::Bool(b) => Some(b.to_string()),
    Value::Number(n) => Some(n.to_string()),
    Value::String(s) => Some(s.clone()),
  }
}
