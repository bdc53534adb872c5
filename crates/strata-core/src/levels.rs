// Rust guideline compliant 2026-10-19

//! Level propagation over the module dependency graph.
//!
//! Levels are assigned wave by wave. The first frontier holds every root that
//! has dependents; each wave stamps the wave number onto the successors of
//! the current frontier and makes them the next frontier. A module reached
//! again in a later wave is overwritten with the higher number, so its final
//! level is one more than the longest chain of dependencies below it.

use crate::error::Violation;
use crate::graph::DependencyGraph;
use crate::models::{index_by_name, BASE_LEVEL};
use crate::prune::{PrunedRelation, RedundancyPruner};
use crate::{Error, ModuleRecord, Result};
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Outcome of a level computation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LevelReport {
    /// Final level of every module, by name.
    pub levels: HashMap<String, u32>,
    /// Number of waves that raised at least one level.
    pub waves: u32,
    /// Dependents removed as redundant, in the order they were pruned.
    pub pruned: Vec<PrunedRelation>,
}

impl LevelReport {
    /// Level of `name`, if it took part in the run.
    pub fn level_of(&self, name: &str) -> Option<u32> {
        self.levels.get(name).copied()
    }

    /// Highest level assigned in the run.
    pub fn max_level(&self) -> u32 {
        self.levels.values().copied().max().unwrap_or(BASE_LEVEL)
    }
}

/// Wave-based level propagation engine.
pub struct LevelEngine<'g> {
    graph: &'g DependencyGraph,
    levels: Vec<u32>,
    pruner: RedundancyPruner<'g>,
}

impl<'g> LevelEngine<'g> {
    /// Creates an engine with every module at the base level.
    ///
    /// # Errors
    ///
    /// Returns a `GraphInvariantViolation` if the graph contains a cycle.
    pub fn new(graph: &'g DependencyGraph) -> Result<Self> {
        graph.validate_acyclic()?;
        Ok(Self {
            graph,
            levels: vec![BASE_LEVEL; graph.node_count()],
            pruner: RedundancyPruner::new(graph)?,
        })
    }

    /// Runs propagation to completion and writes levels back onto `records`.
    ///
    /// `records` must be the records the graph was built from. Redundant
    /// dependents are pruned from them as each pair is visited.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A record for a graph node is missing
    /// - A visited pair has no connecting path
    /// - Propagation runs more waves than there are modules
    pub fn propagate(mut self, records: &mut [ModuleRecord]) -> Result<LevelReport> {
        let graph = self.graph;
        let index = index_by_name(records);
        let wave_limit = u32::try_from(graph.node_count())
            .unwrap_or(u32::MAX)
            .saturating_add(BASE_LEVEL);

        let mut frontier = graph.roots();
        let mut wave = BASE_LEVEL + 1;
        let mut waves = 0;
        let mut pruned = Vec::new();

        while !frontier.is_empty() {
            if wave > wave_limit {
                return Err(self.no_convergence(&frontier));
            }
            debug!(wave, frontier = frontier.len(), "propagating wave");

            let mut next: Vec<NodeIndex> = Vec::new();
            let mut queued: HashSet<NodeIndex> = HashSet::new();

            for &node in &frontier {
                let name = graph.name(node);
                let pos = *index
                    .get(name)
                    .ok_or_else(|| Error::NotFound(name.to_string()))?;
                let successors = graph.successors(node);

                for &successor in &successors {
                    if let Some(relation) =
                        self.pruner
                            .prune_pair(node, successor, &successors, &mut records[pos])?
                    {
                        pruned.push(relation);
                    }
                    self.levels[successor.index()] = wave;
                    if queued.insert(successor) {
                        next.push(successor);
                    }
                }
            }

            if !next.is_empty() {
                waves += 1;
            }
            frontier = next;
            wave += 1;
        }

        let mut levels = HashMap::with_capacity(records.len());
        for record in records.iter_mut() {
            let node = graph.require(&record.name)?;
            record.level = self.levels[node.index()];
            levels.insert(record.name.clone(), record.level);
        }

        let report = LevelReport {
            levels,
            waves,
            pruned,
        };
        info!(
            modules = records.len(),
            waves = report.waves,
            pruned = report.pruned.len(),
            "computed module levels"
        );
        Ok(report)
    }

    fn no_convergence(&self, frontier: &[NodeIndex]) -> Error {
        let node = frontier[0];
        let next = self
            .graph
            .successors(node)
            .first()
            .copied()
            .unwrap_or(node);
        Error::violation(
            Violation::NoConvergence,
            self.graph.name(node),
            self.graph.name(next),
        )
    }
}

/// Computes levels for `records` and prunes their redundant dependents.
///
/// Repeated dependents are collapsed to their first occurrence before
/// propagation, so a single run leaves nothing left to prune.
///
/// Either every record is updated or, on error, the caller should discard
/// `records`: pruning happens while propagating, so a failed run may leave
/// some dependents removed.
///
/// # Errors
///
/// Returns an error if:
/// - A dependent names a module outside `records`
/// - A module name is duplicated
/// - The dependency graph contains a cycle
pub fn compute_levels(records: &mut [ModuleRecord]) -> Result<LevelReport> {
    let graph = DependencyGraph::build(records)?;
    let engine = LevelEngine::new(&graph)?;
    dedup_dependents(records);
    engine.propagate(records)
}

/// Collapses repeated dependents so each record matches its graph edges.
pub(crate) fn dedup_dependents(records: &mut [ModuleRecord]) {
    for record in records.iter_mut() {
        let removed = record.dedup_dependents();
        if removed > 0 {
            debug!(module = %record.name, removed, "dropped repeated dependents");
        }
    }
}

/// Sorts records ascending by level, keeping the current order within a level.
pub fn sort_by_level(records: &mut [ModuleRecord]) {
    records.sort_by_key(|record| record.level);
}
