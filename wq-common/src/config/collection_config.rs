use serde::de::DeserializeOwned;
use serde_json::Value;

use super::config_enums::CollectionKind;
use crate::collection::{capacity::Capacity, collection_options::CollectionOptions};

#[derive(Clone, Debug)]
pub struct CollectionConfig {
    pub kind: CollectionKind,
    pub capacity: Capacity,
    // kept untyped, the item type is chosen by whoever builds the collection
    pub initial: Value,
}

impl CollectionConfig {
    /// Unparsable JSON is kept as a plain string, which coerces to empty later.
    pub fn parse_initial(raw: Option<String>) -> Value {
        match raw {
            Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
            None => Value::Null,
        }
    }

    pub fn options<T: DeserializeOwned>(&self) -> CollectionOptions<T> {
        CollectionOptions::new(
            CollectionOptions::coerce_initial(&self.initial),
            self.capacity,
        )
    }
}
