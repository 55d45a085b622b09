//! Name tables: semantic keys mapped to model-specific identifiers
//!
//! A [`Model`] is built once, either from source with [`ModelBuilder`] or from
//! a table file, and is read-only afterwards. Consumers that should not care
//! which model they talk to take a [`NameTable`].

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NamesError, Result};

/// Lookup capability shared by every model table.
pub trait NameTable {
    /// Name of the model this table describes (e.g. `um`).
    fn model(&self) -> &str;

    fn get(&self, key: &str) -> Option<&str>;

    /// Every semantic key known to this table.
    fn all_keys(&self) -> BTreeSet<&str>;

    /// Identifier for `key`, or [`NamesError::KeyNotFound`].
    fn lookup(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| NamesError::KeyNotFound {
            model: self.model().to_string(),
            key: key.to_string(),
        })
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<T: NameTable + ?Sized> NameTable for Arc<T> {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }

    fn all_keys(&self) -> BTreeSet<&str> {
        (**self).all_keys()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Coordinate,
    Variable,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Coordinate => f.write_str("coordinate"),
            EntryKind::Variable => f.write_str("variable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    identifier: String,
    kind: EntryKind,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Immutable table for one model.
///
/// Entries keep the order they were declared in. On disk a model is written as
/// `{ name, coordinates: { key: id }, variables: { key: id } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModelFile", into = "ModelFile")]
pub struct Model {
    name: String,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn coordinates(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.of_kind(EntryKind::Coordinate)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.of_kind(EntryKind::Variable)
    }

    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn kind(&self, key: &str) -> Option<EntryKind> {
        self.index.get(key).map(|&i| self.entries[i].kind)
    }
}

impl NameTable for Model {
    fn model(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].identifier.as_str())
    }

    fn all_keys(&self) -> BTreeSet<&str> {
        self.keys().collect()
    }
}

/// Collects named entries; validation happens in [`ModelBuilder::build`].
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    entries: Vec<(EntryKind, String, String)>,
}

impl ModelBuilder {
    pub fn coordinate(self, key: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.entry(EntryKind::Coordinate, key, identifier)
    }

    pub fn variable(self, key: impl Into<String>, identifier: impl Into<String>) -> Self {
        self.entry(EntryKind::Variable, key, identifier)
    }

    pub fn entry(
        mut self,
        kind: EntryKind,
        key: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        self.entries.push((kind, key.into(), identifier.into()));
        self
    }

    /// Fails on empty keys, empty identifiers and keys given more than once,
    /// whatever their kind.
    pub fn build(self) -> Result<Model> {
        let mut model = Model {
            name: self.name,
            entries: Vec::with_capacity(self.entries.len()),
            index: HashMap::with_capacity(self.entries.len()),
        };

        for (kind, key, identifier) in self.entries {
            if key.is_empty() {
                return Err(NamesError::EmptyKey { model: model.name });
            }
            if identifier.is_empty() {
                return Err(NamesError::EmptyIdentifier {
                    model: model.name,
                    key,
                });
            }
            if model.index.contains_key(&key) {
                return Err(NamesError::DuplicateKey {
                    model: model.name,
                    key,
                });
            }
            model.index.insert(key.clone(), model.entries.len());
            model.entries.push(Entry {
                key,
                identifier,
                kind,
            });
        }

        Ok(model)
    }
}

// file shape of a model
#[derive(Serialize, Deserialize)]
#[serde(rename = "Model", deny_unknown_fields)]
struct ModelFile {
    name: String,
    #[serde(default)]
    coordinates: Entries,
    #[serde(default)]
    variables: Entries,
}

impl TryFrom<ModelFile> for Model {
    type Error = NamesError;

    fn try_from(file: ModelFile) -> Result<Self> {
        let mut builder = Model::builder(file.name);
        for (key, identifier) in file.coordinates.0 {
            builder = builder.coordinate(key, identifier);
        }
        for (key, identifier) in file.variables.0 {
            builder = builder.variable(key, identifier);
        }
        builder.build()
    }
}

impl From<Model> for ModelFile {
    fn from(model: Model) -> Self {
        let mut coordinates = Vec::new();
        let mut variables = Vec::new();
        for entry in model.entries {
            match entry.kind {
                EntryKind::Coordinate => coordinates.push((entry.key, entry.identifier)),
                EntryKind::Variable => variables.push((entry.key, entry.identifier)),
            }
        }
        ModelFile {
            name: model.name,
            coordinates: Entries(coordinates),
            variables: Entries(variables),
        }
    }
}

/// Ordered map that keeps repeated keys so the builder can reject them.
#[derive(Default)]
struct Entries(Vec<(String, String)>);

impl Serialize for Entries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, identifier) in &self.0 {
            map.serialize_entry(key, identifier)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Entries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of semantic keys to model identifiers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Entries, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, identifier)) = access.next_entry::<String, String>()? {
            entries.push((key, identifier));
        }
        Ok(Entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Model {
        Model::builder("toy")
            .coordinate("t", "time")
            .coordinate("y", "lat")
            .variable("u", "ua")
            .variable("v", "va")
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_and_contains_agree() {
        let m = small();
        for key in ["t", "y", "u", "v", "w", "", "T"] {
            assert_eq!(m.contains(key), m.lookup(key).is_ok(), "key {key:?}");
        }
        assert_eq!(m.lookup("u").unwrap(), "ua");
    }

    #[test]
    fn missing_key_names_model_and_key() {
        let m = small();
        match m.lookup("w").unwrap_err() {
            NamesError::KeyNotFound { model, key } => {
                assert_eq!(model, "toy");
                assert_eq!(key, "w");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn keeps_declaration_order_and_kinds() {
        let m = small();
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["t", "y", "u", "v"]);
        assert_eq!(
            m.coordinates().map(Entry::key).collect::<Vec<_>>(),
            vec!["t", "y"]
        );
        assert_eq!(
            m.variables().map(Entry::identifier).collect::<Vec<_>>(),
            vec!["ua", "va"]
        );
        assert_eq!(m.kind("y"), Some(EntryKind::Coordinate));
        assert_eq!(m.kind("v"), Some(EntryKind::Variable));
        assert_eq!(m.kind("x"), None);
    }

    #[test]
    fn builder_rejects_duplicates_across_kinds() {
        let err = Model::builder("toy")
            .coordinate("t", "time")
            .variable("t", "temperature")
            .build()
            .unwrap_err();
        assert!(matches!(err, NamesError::DuplicateKey { ref key, .. } if key == "t"));
    }

    #[test]
    fn builder_rejects_empty_entries() {
        let err = Model::builder("toy").variable("", "x").build().unwrap_err();
        assert!(matches!(err, NamesError::EmptyKey { .. }));

        let err = Model::builder("toy").variable("u", "").build().unwrap_err();
        assert!(matches!(err, NamesError::EmptyIdentifier { ref key, .. } if key == "u"));
    }

    #[test]
    fn identifiers_may_repeat() {
        let m = Model::builder("toy")
            .variable("a", "same")
            .variable("b", "same")
            .build()
            .unwrap();
        assert_eq!(m.lookup("a").unwrap(), m.lookup("b").unwrap());
    }

    #[test]
    fn serde_rejects_repeated_map_keys() {
        let src = r#"{"name": "toy", "variables": {"u": "ua", "u": "ub"}}"#;
        let err = serde_json::from_str::<Model>(src).unwrap_err();
        assert!(err.to_string().contains("Duplicate key `u`"), "{err}");
    }

    #[test]
    fn serde_keeps_order_through_ron() {
        let m = small();
        let text = ron::to_string(&m).unwrap();
        let back: Model = ron::from_str(&text).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.keys().collect::<Vec<_>>(), vec!["t", "y", "u", "v"]);
    }

    #[test]
    fn arc_is_a_name_table() {
        fn first_id<T: NameTable>(table: &T, key: &str) -> String {
            table.lookup(key).unwrap().to_string()
        }
        let shared = Arc::new(small());
        assert_eq!(first_id(&shared, "t"), "time");
        assert_eq!(shared.all_keys(), small().all_keys());
    }
}
