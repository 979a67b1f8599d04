//! # Storage Layer
//!
//! The dataset is a single static JSON array of [`Property`] records. The
//! [`PropertySource`] trait hides where that document comes from, so the
//! filter engine and the UIs never care about transport.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads `json_data/all_properties.json` (or any
//!   configured path) from disk.
//! - [`memory::InMemorySource`]: a prepared collection for tests, able to
//!   simulate an unreachable dataset.
//!
//! ## Loading
//!
//! Loading is one-shot. [`load`] never fails: any error is logged and an empty
//! collection comes back, which callers must accept as a valid state. The
//! session uses [`try_load`] instead so it can raise its own error flag and
//! show a load-failure message distinct from "no properties".

use crate::error::Result;
use crate::model::Property;

pub mod fs;
pub mod memory;

/// Where the property collection comes from.
pub trait PropertySource {
    /// Fetch and parse the full collection.
    fn fetch(&self) -> Result<Vec<Property>>;

    /// Human readable location, for diagnostics.
    fn describe(&self) -> String;
}

/// Fetch the collection, propagating failures.
pub fn try_load<S: PropertySource + ?Sized>(source: &S) -> Result<Vec<Property>> {
    let properties = source.fetch()?;
    tracing::info!(
        source = %source.describe(),
        count = properties.len(),
        "loaded properties"
    );
    Ok(properties)
}

/// Fetch the collection, returning an empty one on any failure.
pub fn load<S: PropertySource + ?Sized>(source: &S) -> Vec<Property> {
    match try_load(source) {
        Ok(properties) => properties,
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "error loading properties");
            Vec::new()
        }
    }
}
