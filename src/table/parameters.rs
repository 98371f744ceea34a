use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered report parameters, printed as `key: value` lines above the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: IndexMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    ///
    /// An existing name keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder form of [`ParameterSet::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Prefix lines in display form, `"key: value"`.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|(k, v)| format!("{}: {}", k, v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let params = ParameterSet::new()
            .with("From", "2024-01-01")
            .with("To", "2024-01-31")
            .with("From", "2024-01-02");

        let lines: Vec<String> = params.lines().collect();
        assert_eq!(lines, vec!["From: 2024-01-02", "To: 2024-01-31"]);
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let params: ParameterSet = serde_json::from_str(r#"{"z": "1", "a": "2"}"#).unwrap();
        assert_eq!(params.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["z", "a"]);
    }
}
