use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single shopping list entry.
///
/// Modeled as an open JSON object rather than a fixed struct: an update may
/// attach arbitrary extra fields via shallow merge, and those fields survive
/// serialization untouched. Items created by the service always start out
/// with exactly `id`, `name` and `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(pub Map<String, Value>);

impl Item {
    /// Builds a fresh item with the three creation-time fields.
    pub fn new(id: i64, name: Value, quantity: Value) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(id));
        fields.insert("name".to_string(), name);
        fields.insert("quantity".to_string(), quantity);
        Item(fields)
    }

    /// The numeric id, if the stored `id` field is an integer.
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shallow merge: incoming fields overwrite same-named existing fields,
    /// everything else is preserved. Nested values are replaced, not merged.
    /// The `id` field is not protected.
    pub fn merge(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

/// Truthiness test used for name validation and the quantity default:
/// `null`, `false`, `0` and `""` all count as falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Helper to get the current system time in milliseconds.
///
/// Doubles as the id generator for new items: ids are wall-clock derived,
/// so two creations within the same millisecond collide. Accepted risk.
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
