// Rust guideline compliant 2026-10-19

//! Transitive redundancy pruning of recorded dependents.
//!
//! A recorded relation `source -> destination` is redundant when the longest
//! path from `source` to `destination` runs through an intermediate module
//! that `source` also lists as a direct dependent. The relation is then
//! dropped from `source.dependents`; the graph itself is left untouched, so
//! later decisions in the same run still see every original edge.
//!
//! Decisions are made pair by pair while levels propagate, not as one global
//! reduction pass.

use crate::error::Violation;
use crate::graph::{DependencyGraph, LongestPaths};
use crate::{Error, ModuleRecord, Result};
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// A dependents entry removed because a longer path already implies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrunedRelation {
    /// Module whose dependents list lost an entry.
    pub source: String,
    /// The removed dependent.
    pub destination: String,
    /// Direct dependent of `source` through which `destination` is reached.
    pub intermediate: String,
}

/// Pairwise pruner with memoized longest-path searches.
pub struct RedundancyPruner<'g> {
    graph: &'g DependencyGraph,
    order: Vec<NodeIndex>,
    memo: HashMap<NodeIndex, LongestPaths>,
}

impl<'g> RedundancyPruner<'g> {
    /// Creates a pruner for `graph`.
    ///
    /// # Errors
    ///
    /// Returns a `GraphInvariantViolation` if the graph contains a cycle.
    pub fn new(graph: &'g DependencyGraph) -> Result<Self> {
        Ok(Self {
            graph,
            order: graph.topological_order()?,
            memo: HashMap::new(),
        })
    }

    /// Longest path from `source` to `destination`, both ends included.
    ///
    /// Longest distances to each destination are computed once and reused
    /// for every source.
    ///
    /// # Errors
    ///
    /// Returns a `GraphInvariantViolation` if `destination` is not reachable.
    pub fn longest_path(
        &mut self,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<Vec<NodeIndex>> {
        let graph = self.graph;
        let order = &self.order;
        let paths = self
            .memo
            .entry(destination)
            .or_insert_with(|| graph.longest_paths_to(destination, order));
        paths.path_from(graph, source).ok_or_else(|| {
            Error::violation(
                Violation::MissingPath,
                graph.name(source),
                graph.name(destination),
            )
        })
    }

    /// Evaluates the direct relation `source -> destination`.
    ///
    /// `successors` is the full successor set of `source` examined in the
    /// current wave and `record` is the record of `source`.
    ///
    /// # Returns
    ///
    /// The relation if this call removed it from `record.dependents`, `None`
    /// if it is not redundant or was already removed.
    ///
    /// # Errors
    ///
    /// Returns a `GraphInvariantViolation` if no path joins the pair.
    pub fn prune_pair(
        &mut self,
        source: NodeIndex,
        destination: NodeIndex,
        successors: &[NodeIndex],
        record: &mut ModuleRecord,
    ) -> Result<Option<PrunedRelation>> {
        let path = self.longest_path(source, destination)?;
        let intermediates = path.get(1..path.len().saturating_sub(1)).unwrap_or(&[]);

        let Some(&witness) = intermediates
            .iter()
            .find(|&&n| successors.contains(&n))
        else {
            return Ok(None);
        };

        let destination_name = self.graph.name(destination);
        if !record.remove_dependent(destination_name) {
            return Ok(None);
        }

        debug!(
            source = %record.name,
            destination = destination_name,
            via = self.graph.name(witness),
            "pruned redundant dependent"
        );

        Ok(Some(PrunedRelation {
            source: record.name.clone(),
            destination: destination_name.to_string(),
            intermediate: self.graph.name(witness).to_string(),
        }))
    }
}

/// Prunes every redundant relation in `records` without computing levels.
///
/// Visits modules in record order and their dependents in recorded order.
///
/// # Errors
///
/// Returns an error if the graph cannot be built or is cyclic.
pub fn prune_redundant(records: &mut [ModuleRecord]) -> Result<Vec<PrunedRelation>> {
    let graph = DependencyGraph::build(records)?;
    let mut pruner = RedundancyPruner::new(&graph)?;
    crate::levels::dedup_dependents(records);
    let mut pruned = Vec::new();

    // nodes are created in record order
    for source in graph.nodes() {
        let successors = graph.successors(source);
        let record = &mut records[source.index()];
        for &destination in &successors {
            if let Some(relation) = pruner.prune_pair(source, destination, &successors, record)? {
                pruned.push(relation);
            }
        }
    }

    Ok(pruned)
}
