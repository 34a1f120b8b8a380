//! Ordered collection of named objects passed into and out of processes.

use std::path::Path;

use crate::object::{Object, ObjectError, ObjectKind};

/// Ordered, named collection of [`Object`]s.
///
/// Several objects may share a name (e.g. a form field carrying multiple
/// files); lookups by name return the first one added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    objects: Vec<Object>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `object` under `name`, replacing whatever name it carried.
    pub fn add(&mut self, mut object: Object, name: impl Into<String>) {
        object.set_name(name.into());
        self.objects.push(object);
    }

    /// Load the file at `path` and add it under `name`.
    pub async fn add_file(&mut self, path: &Path, name: impl Into<String>) -> Result<(), ObjectError> {
        let object = Object::open(path).await?;
        self.add(object, name);
        Ok(())
    }

    /// First object registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// First object whose kind is one of `kinds`.
    pub fn get_by_kinds(&self, kinds: &[ObjectKind]) -> Option<&Object> {
        self.objects.iter().find(|o| kinds.contains(&o.kind()))
    }

    /// Distinct names in first-insertion order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for object in &self.objects {
            if !keys.contains(&object.name()) {
                keys.push(object.name());
            }
        }
        keys
    }

    /// Number of objects (not names).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn first(&self) -> Option<&Object> {
        self.objects.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }
}

impl<'a> IntoIterator for &'a Payload {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectData;
    use serde_json::Map;

    fn text(value: &str) -> Object {
        Object::new("ignored", ObjectData::Text(value.to_string()))
    }

    #[test]
    fn test_add_renames_object() {
        let mut payload = Payload::new();
        payload.add(text("a"), "first");

        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("first").unwrap().name(), "first");
        assert!(payload.get("ignored").is_none());
    }

    #[test]
    fn test_keys_are_distinct_and_ordered() {
        let mut payload = Payload::new();
        payload.add(text("1"), "b");
        payload.add(text("2"), "a");
        payload.add(text("3"), "b");

        assert_eq!(payload.len(), 3);
        assert_eq!(payload.keys(), vec!["b", "a"]);
        assert_eq!(
            payload.get("b").unwrap().data(),
            &ObjectData::Text("1".to_string())
        );
    }

    #[test]
    fn test_get_by_kinds_returns_first_match() {
        let mut payload = Payload::new();
        payload.add(text("t"), "t");
        payload.add(Object::new("", ObjectData::Array(Vec::new())), "arr");
        payload.add(Object::new("", ObjectData::Dictionary(Map::new())), "dict");

        let found = payload
            .get_by_kinds(&[ObjectKind::Dictionary, ObjectKind::Array])
            .unwrap();
        assert_eq!(found.name(), "arr");
        assert!(payload.get_by_kinds(&[ObjectKind::Pdf]).is_none());
    }

    #[tokio::test]
    async fn test_add_file_uses_given_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let mut payload = Payload::new();
        payload.add_file(&path, "table").await.unwrap();

        let object = payload.get("table").unwrap();
        assert_eq!(object.kind(), ObjectKind::Text);
    }
}
