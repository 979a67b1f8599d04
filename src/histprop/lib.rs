//! # Histprop Architecture
//!
//! Histprop browses a historic property survey: a single JSON collection of
//! surveyed buildings, narrowed down by free text and by street, style,
//! condition and construction date. It is a **UI-agnostic library** with a CLI
//! client on top, not a CLI that happens to contain some library code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads once, then dispatches to commands                  │
//! │  - Turns a failed load into a generic error                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over Session (session.rs)    │
//! │  - list, view, options, stats, doctor, config               │
//! │  - Filtering (filter.rs) and vocabularies (vocab.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - PropertySource trait                                     │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns
//! `Result<CmdResult>`. It never prints and never exits. The only I/O is the
//! one-shot dataset read in [`store::fs::FileSource`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`session`]: Loaded collection, load status and current filters
//! - [`filter`]: The filter engine
//! - [`vocab`]: Option vocabularies, street-name heuristic and tallies
//! - [`store`]: Data source abstraction and implementations
//! - [`model`]: Core data types (`Property`, `PropertyInfo`, `SearchFilters`)
//! - [`config`]: Layered configuration
//! - [`init`]: Project discovery and context setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
pub mod vocab;
