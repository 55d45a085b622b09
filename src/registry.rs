//! Named collection of model tables
//!
//! Build the registry once at start-up and pass it (or the `Arc<Model>`
//! handles it gives out) to consumers. There is no way to change a model once
//! it is registered.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{NamesError, Result};
use crate::models;
use crate::table::Model;

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Arc<Model>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in model.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for model in models::builtin() {
            // built-in names are distinct
            registry.models.insert(model.name().to_string(), Arc::new(model));
        }
        registry
    }

    pub fn insert(&mut self, model: Model) -> Result<()> {
        if self.models.contains_key(model.name()) {
            return Err(NamesError::DuplicateModel(model.name().to_string()));
        }
        tracing::debug!(model = model.name(), entries = model.len(), "registered model");
        self.models.insert(model.name().to_string(), Arc::new(model));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .map(|m| m.as_ref())
            .ok_or_else(|| NamesError::UnknownModel(name.to_string()))
    }

    /// Shared handle that can outlive the registry or move to another thread.
    pub fn shared(&self, name: &str) -> Result<Arc<Model>> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| NamesError::UnknownModel(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Model names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
