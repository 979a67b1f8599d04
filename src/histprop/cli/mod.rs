//! # CLI Behavior
//!
//! This is **one possible UI client** for histprop, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution (`histprop`)
//!
//! Running `histprop` with no subcommand is `histprop list`: the whole
//! collection as cards with a "Showing N of M properties" summary.
//!
//! ## Narrowing
//!
//! - `histprop list --street Street --style colonial` narrows by any mix of
//!   dimensions. Every active dimension must match.
//! - `histprop search <term...>` is free text only.
//! - `histprop options [field]` prints the values worth passing to the flags.
//!
//! An empty result is not an error. A dataset that cannot be loaded is: the
//! CLI prints a generic message with a retry hint and exits with 1.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Terminal style theme
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
