// src/session.rs
//! Caller-side session: a swappable graph handle plus the last built view.
//!
//! The engine keeps no state; this wrapper exists for callers that want the
//! Idle / BuiltWithoutFocal / BuiltWithFocal lifecycle tracked for them.
//! Every view is a full rebuild.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::engine::{Engine, SnapshotRequest, SnapshotResponse};
use crate::error::Result;
use crate::graph::store::FullGraph;
use crate::source::SourceProvider;
use crate::types::CoreSet;

/// Read handle to the current immutable graph. Refreshes swap the whole graph.
#[derive(Debug)]
pub struct GraphHandle {
    inner: ArcSwap<FullGraph>,
}

impl GraphHandle {
    #[must_use]
    pub fn new(graph: FullGraph) -> Self {
        Self {
            inner: ArcSwap::from_pointee(graph),
        }
    }

    /// The graph as of now. Later swaps do not affect the returned `Arc`.
    #[must_use]
    pub fn load(&self) -> Arc<FullGraph> {
        self.inner.load_full()
    }

    /// Atomically replaces the graph, returning the previous one.
    pub fn swap(&self, graph: FullGraph) -> Arc<FullGraph> {
        self.inner.swap(Arc::new(graph))
    }
}

/// Where a session is in its lifecycle. There is no terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    BuiltWithoutFocal(Arc<SnapshotResponse>),
    BuiltWithFocal {
        focal: String,
        response: Arc<SnapshotResponse>,
    },
}

impl SessionState {
    #[must_use]
    pub fn response(&self) -> Option<&SnapshotResponse> {
        match self {
            Self::Idle => None,
            Self::BuiltWithoutFocal(r) | Self::BuiltWithFocal { response: r, .. } => Some(r),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::BuiltWithoutFocal(_) => "BUILT",
            Self::BuiltWithFocal { .. } => "BUILT_WITH_FOCAL",
        }
    }
}

pub struct Session {
    engine: Engine,
    core: CoreSet,
    graph: GraphHandle,
    state: SessionState,
}

impl Session {
    /// Fetches from `provider`, applies the global filter once, starts Idle.
    ///
    /// # Errors
    /// Propagates provider failures.
    pub fn open(engine: Engine, core: CoreSet, provider: &dyn SourceProvider) -> Result<Self> {
        let raw = provider.fetch(&core)?;
        let filtered = engine.filter(&raw, &core);
        Ok(Self {
            engine,
            core,
            graph: GraphHandle::new(filtered),
            state: SessionState::Idle,
        })
    }

    /// Rebuilds the snapshot for a slider position and optional focal node.
    ///
    /// On error the previous state is kept.
    ///
    /// # Errors
    /// Returns `CutoffOutOfRange` for a fraction outside `[0, 100]`.
    pub fn view(&mut self, cutoff_fraction: f64, focal: Option<&str>) -> Result<&SessionState> {
        let graph = self.graph.load();
        let request = SnapshotRequest::new(&self.core, cutoff_fraction, focal);
        let response = Arc::new(self.engine.build(&graph, &request)?);

        self.state = match focal {
            Some(f) => SessionState::BuiltWithFocal {
                focal: f.to_string(),
                response,
            },
            None => SessionState::BuiltWithoutFocal(response),
        };
        Ok(&self.state)
    }

    /// Re-fetches and re-filters, swaps the graph in and returns to Idle.
    ///
    /// # Errors
    /// Propagates provider failures; the old graph stays in place.
    pub fn refresh(&mut self, provider: &dyn SourceProvider) -> Result<()> {
        let raw = provider.fetch(&self.core)?;
        let filtered = self.engine.filter(&raw, &self.core);
        let previous = self.graph.swap(filtered);
        info!(
            previous_accounts = previous.account_count(),
            accounts = self.graph.load().account_count(),
            "graph handle swapped"
        );
        self.state = SessionState::Idle;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn core(&self) -> &CoreSet {
        &self.core
    }

    #[must_use]
    pub fn graph(&self) -> Arc<FullGraph> {
        self.graph.load()
    }
}
