//! Deferred-recompute view over the query pipeline.
//!
//! Recomputing the filtered/sorted grid over a large catalog is expensive
//! relative to a keystroke, so the published rows are allowed to lag one
//! step behind the latest accepted spec while a search recompute is in
//! flight. Publication is guarded by a monotonic generation counter: a
//! completion older than what is already published is discarded, so recency
//! never regresses once a newer, cheaper update has landed.
//!
//! The caller decides which path an update takes: [`CatalogView::set_spec`]
//! recomputes and publishes synchronously (category toggles, sort changes,
//! reset), [`CatalogView::set_spec_deferred`] records a pending ticket the
//! host executes when idle (search keystrokes).

use neokicks_core::{Catalog, Product};

use crate::query::{self, QuerySpec};

/// A deferred recompute handed to the host to run when idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeTask {
    generation: u64,
    spec: QuerySpec,
}

impl RecomputeTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    /// Run the projection. Pure: no view state is touched until the result
    /// is handed back to [`CatalogView::complete`].
    pub fn execute(&self, catalog: &Catalog) -> RecomputeResult {
        RecomputeResult {
            generation: self.generation,
            rows: query::run(catalog, &self.spec),
        }
    }
}

/// Output of a [`RecomputeTask`], tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputeResult {
    generation: u64,
    rows: Vec<Product>,
}

/// The query pipeline's render-facing store.
///
/// Owns the latest accepted [`QuerySpec`], the published rows the grid
/// renders, and at most one pending recompute ticket.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    spec: QuerySpec,
    accepted_generation: u64,
    published: Vec<Product>,
    published_generation: u64,
    pending: Option<RecomputeTask>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical latest spec. This never lags: only the published rows
    /// may be behind it.
    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    /// The rows the grid renders right now.
    pub fn rows(&self) -> &[Product] {
        &self.published
    }

    /// Whether the published rows reflect the latest accepted spec.
    pub fn is_current(&self) -> bool {
        self.published_generation == self.accepted_generation
    }

    /// Accept a new spec as canonical and publish it synchronously.
    ///
    /// This is the inexpensive-update path; it also supersedes whatever
    /// ticket was pending (the guard would discard its result anyway).
    pub fn set_spec(&mut self, catalog: &Catalog, spec: QuerySpec) {
        if spec == self.spec {
            return;
        }

        self.accepted_generation += 1;
        self.spec = spec;
        self.publish(query::run(catalog, &self.spec), self.accepted_generation);
        self.pending = None;
    }

    /// Accept a new spec as canonical, leaving the published rows stale
    /// until the host executes the pending ticket.
    ///
    /// This is the compute-bound path: the grid may show the previous list
    /// while this spec's recompute is in flight.
    pub fn set_spec_deferred(&mut self, spec: QuerySpec) {
        if spec == self.spec {
            return;
        }

        self.accepted_generation += 1;
        self.spec = spec;
        tracing::debug!(
            generation = self.accepted_generation,
            "deferring query recompute"
        );
        self.pending = Some(RecomputeTask {
            generation: self.accepted_generation,
            spec: self.spec.clone(),
        });
    }

    /// Atomic reset: category to All, sort to none, search text to empty in
    /// one accepted spec. No partial reset is ever observable.
    pub fn reset(&mut self, catalog: &Catalog) {
        self.set_spec(catalog, QuerySpec::default());
    }

    /// Re-project the current spec, e.g. when the catalog arrives.
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.accepted_generation += 1;
        self.publish(query::run(catalog, &self.spec), self.accepted_generation);
        self.pending = None;
    }

    /// Hand the pending recompute (if any) to the host.
    pub fn take_pending(&mut self) -> Option<RecomputeTask> {
        self.pending.take()
    }

    /// Publish a completed recompute, unless something newer already landed.
    pub fn complete(&mut self, result: RecomputeResult) {
        if result.generation <= self.published_generation {
            tracing::debug!(
                generation = result.generation,
                published = self.published_generation,
                "discarding stale recompute result"
            );
            return;
        }

        self.publish(result.rows, result.generation);
    }

    fn publish(&mut self, rows: Vec<Product>, generation: u64) {
        self.published = rows;
        self.published_generation = generation;
    }
}
