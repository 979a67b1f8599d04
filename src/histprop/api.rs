//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! operation, whatever UI sits on top.
//!
//! The facade:
//! - **Loads** the collection once, when it is constructed
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (e.g., parsing an options field name)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no presentation logic.
//!
//! ## Generic Over PropertySource
//!
//! `HistPropApi<S: PropertySource>` runs over any source:
//! - Production: `HistPropApi<FileSource>`
//! - Testing: `HistPropApi<InMemorySource>`
//!
//! When the load failed, data operations return
//! [`HistPropError::Load`] carrying only the generic failure message.

use crate::commands::{self, config::ConfigAction, CmdResult, OptionsField};
use crate::config::HistPropConfig;
use crate::error::{HistPropError, Result};
use crate::model::SearchFilters;
use crate::session::{LoadStatus, Session};
use crate::store::PropertySource;

pub struct HistPropApi<S: PropertySource> {
    source: S,
    session: Session,
    config: HistPropConfig,
}

impl<S: PropertySource> HistPropApi<S> {
    pub fn new(source: S, config: HistPropConfig) -> Self {
        let mut session = Session::new();
        session.load_from(&source);
        Self {
            source,
            session,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> &LoadStatus {
        self.session.status()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the load again, replacing whatever the session held.
    pub fn reload(&mut self) -> &LoadStatus {
        self.session.load_from(&self.source);
        self.session.status()
    }

    pub fn list(&mut self, filters: SearchFilters) -> Result<CmdResult> {
        self.ensure_loaded()?;
        commands::list::run(&mut self.session, filters)
    }

    /// Free-text search only; other filter dimensions are cleared.
    pub fn search<I: AsRef<str>>(&mut self, terms: &[I]) -> Result<CmdResult> {
        let term = terms
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        self.list(SearchFilters::new().with_search_term(term))
    }

    pub fn view<I: AsRef<str>>(&self, filenames: &[I]) -> Result<CmdResult> {
        self.ensure_loaded()?;
        commands::view::run(&self.session, filenames)
    }

    pub fn options(&self, field: Option<&str>) -> Result<CmdResult> {
        self.ensure_loaded()?;
        let field = field.map(str::parse::<OptionsField>).transpose()?;
        commands::options::run(&self.session, field)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        self.ensure_loaded()?;
        commands::stats::run(&self.session)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        self.ensure_loaded()?;
        commands::doctor::run(&self.session)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config, action)
    }

    fn ensure_loaded(&self) -> Result<()> {
        match self.session.status() {
            LoadStatus::Ready => Ok(()),
            LoadStatus::Error(message) => Err(HistPropError::Load(message.clone())),
            LoadStatus::Loading => Err(HistPropError::Api("Properties are still loading".into())),
        }
    }
}
