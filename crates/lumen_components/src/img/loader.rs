//! Image loading state machine with a single fallback retry.
//!
//! The loader never fetches anything itself. Whatever actually loads the
//! image (a browser `<img>`, an HTTP client, a test) reports each settlement
//! through [`ImageLoader::on_source_settled`], and the loader decides what
//! the view should show next.
//!
//! ```text
//! Loading(primary) --success--> Loaded(primary)
//!        |
//!        +--failure, distinct fallback--> Loading(fallback) --success--> Loaded(fallback)
//!        |                                       |
//!        +--failure, no fallback--> Failed(primary)  +--failure--> Failed(fallback)
//! ```
//!
//! Settlements for a source that is no longer active are dropped, so a slow
//! primary response can never overwrite the fallback's outcome.

use lumen_core::{LumenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// What the view should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    /// `Loaded` and `Failed` accept no further settlements.
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => write!(f, "loading"),
            LoadState::Loaded => write!(f, "loaded"),
            LoadState::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Settlement {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveSource {
    Primary,
    Fallback,
}

/// Position of the loader: the visible state plus which source it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadPhase {
    pub state: LoadState,
    pub active: ActiveSource,
}

impl LoadPhase {
    pub const INITIAL: LoadPhase = LoadPhase {
        state: LoadState::Loading,
        active: ActiveSource::Primary,
    };

    /// Apply a settlement for the active source.
    ///
    /// `has_distinct_fallback` is true when a fallback exists and differs
    /// from the primary. The fallback is tried at most once: a failure while
    /// already on the fallback is terminal.
    pub fn settle(self, outcome: Settlement, has_distinct_fallback: bool) -> LoadPhase {
        if self.state.is_terminal() {
            return self;
        }

        match (outcome, self.active) {
            (Settlement::Success, _) => LoadPhase {
                state: LoadState::Loaded,
                ..self
            },
            (Settlement::Failure, ActiveSource::Primary) if has_distinct_fallback => LoadPhase {
                state: LoadState::Loading,
                active: ActiveSource::Fallback,
            },
            (Settlement::Failure, _) => LoadPhase {
                state: LoadState::Failed,
                ..self
            },
        }
    }
}

/// Renderable snapshot of a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageView<'a> {
    pub state: LoadState,
    pub source: &'a str,
}

/// Drives one image request from its primary source to at most one fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoader {
    primary: String,
    fallback: Option<String>,
    phase: LoadPhase,
}

impl ImageLoader {
    /// Loader for a single source with nothing to fall back to.
    pub fn new(primary: impl Into<String>) -> Result<Self> {
        Self::from_sources(primary.into(), None)
    }

    pub fn with_fallback(primary: impl Into<String>, fallback: impl Into<String>) -> Result<Self> {
        Self::from_sources(primary.into(), Some(fallback.into()))
    }

    /// Build a loader in the `Loading` state on `primary`.
    ///
    /// An empty primary is rejected. An empty fallback counts as no fallback.
    pub fn from_sources(primary: String, fallback: Option<String>) -> Result<Self> {
        if primary.is_empty() {
            return Err(LumenError::invalid_input(
                "primary image source must not be empty",
            ));
        }
        let fallback = fallback.filter(|f| !f.is_empty());

        debug!(primary = %primary, fallback = ?fallback, "image request created");

        Ok(Self {
            primary,
            fallback,
            phase: LoadPhase::INITIAL,
        })
    }

    /// Replace the request with a new source pair and start over.
    ///
    /// Settlements still in flight for the old sources no longer match and
    /// are dropped when they arrive.
    pub fn reset(&mut self, primary: String, fallback: Option<String>) -> Result<()> {
        *self = Self::from_sources(primary, fallback)?;
        Ok(())
    }

    pub fn primary_source(&self) -> &str {
        &self.primary
    }

    pub fn fallback_source(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn current_source(&self) -> &str {
        match self.phase.active {
            ActiveSource::Primary => &self.primary,
            // Only reachable when a distinct fallback exists.
            ActiveSource::Fallback => self.fallback.as_deref().unwrap_or(&self.primary),
        }
    }

    pub fn state(&self) -> LoadState {
        self.phase.state
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_using_fallback(&self) -> bool {
        self.phase.active == ActiveSource::Fallback
    }

    fn has_distinct_fallback(&self) -> bool {
        self.fallback
            .as_deref()
            .is_some_and(|fallback| fallback != self.primary)
    }

    pub fn current_view(&self) -> ImageView<'_> {
        ImageView {
            state: self.phase.state,
            source: self.current_source(),
        }
    }

    /// Feed the outcome of a fetch for `source`.
    ///
    /// Returns the view after the transition. A settlement for any source
    /// other than the current one leaves the loader untouched.
    pub fn on_source_settled(&mut self, source: &str, outcome: Settlement) -> ImageView<'_> {
        if source != self.current_source() {
            trace!(
                source = %source,
                current = %self.current_source(),
                ?outcome,
                "dropping stale image settlement"
            );
            return self.current_view();
        }

        let next = self.phase.settle(outcome, self.has_distinct_fallback());
        if next != self.phase {
            debug!(
                from = %self.phase.state,
                to = %next.state,
                source = %source,
                ?outcome,
                "image load transition"
            );
            self.phase = next;
        }

        self.current_view()
    }
}
