//! # Session State
//!
//! The application state a UI owns: the loaded collection, whether loading
//! succeeded, the current filters and the records it lets through.
//!
//! The collection is written once by [`Session::load_from`] and only read
//! afterwards. Every [`Session::apply`] filters the *full* collection again,
//! never the previous subset, so clearing or loosening filters always brings
//! records back.

use crate::filter::matches;
use crate::model::{Property, SearchFilters};
use crate::store::{try_load, PropertySource};
use crate::vocab::Vocabularies;

/// Message shown for any load failure. Details go to the log only.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load properties";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Error(String),
    Ready,
}

#[derive(Debug)]
pub struct Session {
    properties: Vec<Property>,
    status: LoadStatus,
    filters: SearchFilters,
    vocabularies: Vocabularies,
    visible: Vec<usize>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            status: LoadStatus::Loading,
            filters: SearchFilters::default(),
            vocabularies: Vocabularies::default(),
            visible: Vec::new(),
        }
    }

    /// Builds a ready session over an already loaded collection.
    pub fn with_properties(properties: Vec<Property>) -> Self {
        let mut session = Self::new();
        session.install(properties);
        session
    }

    /// Runs the one-shot load. On failure the session holds no records and
    /// reports [`LoadStatus::Error`].
    pub fn load_from<S: PropertySource + ?Sized>(&mut self, source: &S) {
        match try_load(source) {
            Ok(properties) => self.install(properties),
            Err(e) => {
                tracing::error!(source = %source.describe(), error = %e, "error loading properties");
                self.properties.clear();
                self.visible.clear();
                self.vocabularies = Vocabularies::default();
                self.status = LoadStatus::Error(LOAD_FAILURE_MESSAGE.to_string());
            }
        }
    }

    fn install(&mut self, properties: Vec<Property>) {
        self.vocabularies = Vocabularies::derive(&properties);
        self.properties = properties;
        self.status = LoadStatus::Ready;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = self
            .properties
            .iter()
            .enumerate()
            .filter(|(_, property)| matches(property, &self.filters))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(
            visible = self.visible.len(),
            total = self.properties.len(),
            "applied filters"
        );
    }

    /// Replaces the filters wholesale and re-runs filtering.
    pub fn apply(&mut self, filters: SearchFilters) {
        self.filters = filters;
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.apply(SearchFilters::default());
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn total(&self) -> usize {
        self.properties.len()
    }

    pub fn visible(&self) -> Vec<&Property> {
        self.visible.iter().map(|&i| &self.properties[i]).collect()
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocabularies
    }

    /// Looks a record up by its unique `filename`.
    pub fn find(&self, filename: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.filename == filename)
    }
}
