//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files under `templates/`, included here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a block tag
//! on its own line produces no output line. Layout math (widths, truncation)
//! happens in Rust; templates pick styles and decide what to show.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const OPTIONS_TEMPLATE: &str = include_str!("templates/options.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
