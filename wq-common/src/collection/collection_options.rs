use serde::de::DeserializeOwned;
use serde_json::Value;

use super::capacity::Capacity;

const INITIAL: &str = "initial";
const CAPACITY: &str = "capacity";

/// Construction arguments of a collection, after coercion.
///
/// Untyped inputs never fail: a non-sequence `initial` becomes empty and a
/// malformed `capacity` becomes [`Capacity::Unbounded`], each with a warning.
#[derive(Clone, Debug)]
pub struct CollectionOptions<T> {
    pub initial: Vec<T>,
    pub capacity: Capacity,
}

impl<T> Default for CollectionOptions<T> {
    fn default() -> Self {
        Self {
            initial: Vec::new(),
            capacity: Capacity::Unbounded,
        }
    }
}

impl<T> CollectionOptions<T> {
    pub fn new(initial: Vec<T>, capacity: Capacity) -> Self {
        Self { initial, capacity }
    }
}

impl<T: DeserializeOwned> CollectionOptions<T> {
    pub fn from_values(initial: &Value, capacity: &Value) -> Self {
        Self {
            initial: Self::coerce_initial(initial),
            capacity: Capacity::from_value(capacity),
        }
    }

    /// Reads `{"initial": [...], "capacity": n}`, missing keys take defaults.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_values(
                map.get(INITIAL).unwrap_or(&Value::Null),
                map.get(CAPACITY).unwrap_or(&Value::Null),
            ),
            Value::Null => Self::default(),
            other => {
                log_warn!(
                    "expecting collection options to be an object, got {}. Defaulting to empty.",
                    other
                );
                Self::default()
            }
        }
    }

    pub fn coerce_initial(initial: &Value) -> Vec<T> {
        match initial {
            Value::Null => Vec::new(),
            Value::Array(_) => match serde_json::from_value::<Vec<T>>(initial.clone()) {
                Ok(items) => items,
                Err(err) => {
                    log_warn!(
                        "cannot read initial items: {}. Defaulting to empty.",
                        err
                    );
                    Vec::new()
                }
            },
            other => {
                log_warn!(
                    "cannot instantiate collection with non-array {}. Defaulting to empty.",
                    other
                );
                Vec::new()
            }
        }
    }
}
