//! Record handle shared between collections and screens

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

pub type Attributes = Map<String, Value>;

/// Records are shared by reference: a screen editing a record edits the
/// instance its collection holds.
pub type RecordRef = Arc<Record>;

#[derive(Debug)]
pub struct Record {
    /// Client-side key, stable for the lifetime of the instance
    key: Uuid,
    /// Collection this record belongs to (or will be saved into)
    collection: String,
    attributes: RwLock<Attributes>,
}

impl Record {
    pub fn new(collection: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            key: Uuid::new_v4(),
            collection: collection.into(),
            attributes: RwLock::new(attributes),
        }
    }

    /// Build a record that carries only an id
    pub fn with_id(collection: impl Into<String>, id: &str) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert("id".to_string(), Value::String(id.to_string()));
        Self::new(collection, attributes)
    }

    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The `id` attribute; numeric ids are stringified
    pub fn id(&self) -> Option<String> {
        match self.attributes.read().get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// True until the record has been assigned an id
    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.attributes.read().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.attributes.write().insert(key.into(), value);
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_is_stringified() {
        let attrs = json!({"id": 7, "title": "Hello"});
        let record = Record::new("articles", attrs.as_object().unwrap().clone());
        assert_eq!(record.id(), Some("7".to_string()));
        assert!(!record.is_new());
    }

    #[test]
    fn test_new_record_has_no_id() {
        let record = Record::new("articles", Attributes::new());
        assert!(record.is_new());
        assert_eq!(record.collection(), "articles");

        record.set("id", json!("42"));
        assert_eq!(record.id(), Some("42".to_string()));
    }

    #[test]
    fn test_keys_are_unique() {
        let a = Record::with_id("articles", "1");
        let b = Record::with_id("articles", "1");
        assert_ne!(a.key(), b.key());
    }
}
