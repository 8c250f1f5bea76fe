use serde_json::Value;
use std::collections::HashMap;

/// Labels attached to the resource under evaluation.
///
/// Keeps the order in which labels were presented, so violation lists render in document
/// order. Inserting an existing key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
    /// Position of each key in `entries`.
    index: HashMap<String, usize>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label map from the JSON value found at the label path.
    ///
    /// Anything other than an object yields an empty map. String values are taken as-is;
    /// other scalars use their JSON text and `null` becomes the empty string.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        obj.iter()
            .map(|(key, value)| (key.clone(), label_value_text(value)))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LabelMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LabelMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

fn label_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
