// Rust guideline compliant 2026-10-19

//! Graph module for module dependency relations.
//!
//! An edge `A -> B` means "B depends on A": every module points at the
//! modules listed in its `dependents`. Nodes are added in record order, so
//! iteration over nodes, roots and successors is stable across runs.

use crate::error::Violation;
use crate::{Error, ModuleRecord, Result};
use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// Dependency graph over the modules of a single run.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Petgraph directed graph where nodes are module names.
    graph: DiGraph<String, ()>,
    /// Map of module names to their NodeIndex in the graph.
    name_to_node: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Builds the dependency graph from module records.
    ///
    /// The node set is exactly the set of record names and the edge set is
    /// the union of `record -> dependent` for every listed dependent.
    /// Repeated dependents collapse into a single edge.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A module name appears more than once
    /// - A dependent is not one of the records
    pub fn build(records: &[ModuleRecord]) -> Result<Self> {
        let mut graph = DiGraph::with_capacity(records.len(), 0);
        let mut name_to_node = HashMap::with_capacity(records.len());

        for record in records {
            if name_to_node.contains_key(&record.name) {
                return Err(Error::DuplicateModule(record.name.clone()));
            }
            let node_idx = graph.add_node(record.name.clone());
            name_to_node.insert(record.name.clone(), node_idx);
        }

        for record in records {
            let from_idx = name_to_node[&record.name];
            for dependent in &record.dependents {
                let to_idx = name_to_node.get(dependent).copied().ok_or_else(|| {
                    Error::InputInconsistency {
                        module: record.name.clone(),
                        dependent: dependent.clone(),
                    }
                })?;
                graph.update_edge(from_idx, to_idx, ());
            }
        }

        Ok(Self {
            graph,
            name_to_node,
        })
    }

    /// Returns the node for a module name.
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.name_to_node.get(name).copied()
    }

    /// Returns the node for a module name or a `NotFound` error.
    ///
    /// # Errors
    ///
    /// Returns an error if the module is not part of the graph.
    pub fn require(&self, name: &str) -> Result<NodeIndex> {
        self.node(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Returns the module name of a node.
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// Number of modules in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct dependency relations in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes in record order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Direct successors (dependents) of `node` in the order they were recorded.
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks outgoing edges newest first
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        successors.reverse();
        successors
    }

    /// Names of the direct successors of `name`, in recorded order.
    ///
    /// # Errors
    ///
    /// Returns an error if the module is not part of the graph.
    pub fn successor_names(&self, name: &str) -> Result<Vec<String>> {
        let node = self.require(name)?;
        Ok(self
            .successors(node)
            .into_iter()
            .map(|n| self.graph[n].clone())
            .collect())
    }

    /// Number of modules `node` depends on.
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .count()
    }

    /// Number of modules that depend on `node`.
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .count()
    }

    /// Returns true if `to` is recorded as a direct dependent of `from`.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.node(from), self.node(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Roots that influence other modules: no dependencies, at least one dependent.
    ///
    /// Modules with neither dependencies nor dependents are not roots here;
    /// they keep the base level and never enter propagation.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&n| self.in_degree(n) == 0 && self.out_degree(n) > 0)
            .collect()
    }

    /// Finds one dependency relation that lies on a cycle.
    ///
    /// # Returns
    ///
    /// `Some((from, to))` for an edge whose endpoints share a strongly
    /// connected component (a self-dependency included), `None` for a DAG.
    pub fn find_cycle_pair(&self) -> Option<(NodeIndex, NodeIndex)> {
        let mut component_of = vec![usize::MAX; self.graph.node_count()];
        for (id, component) in tarjan_scc(&self.graph).into_iter().enumerate() {
            for node in component {
                component_of[node.index()] = id;
            }
        }

        self.graph.node_indices().find_map(|node| {
            self.successors(node)
                .into_iter()
                .find(|succ| component_of[succ.index()] == component_of[node.index()])
                .map(|succ| (node, succ))
        })
    }

    /// Checks that the graph is acyclic.
    ///
    /// # Errors
    ///
    /// Returns a `GraphInvariantViolation` naming a module pair on the cycle.
    pub fn validate_acyclic(&self) -> Result<()> {
        match self.find_cycle_pair() {
            Some((from, to)) => Err(Error::violation(
                Violation::Cycle,
                self.name(from),
                self.name(to),
            )),
            None => Ok(()),
        }
    }

    /// Returns the nodes in a topological order (dependencies first).
    ///
    /// # Errors
    ///
    /// Returns a `GraphInvariantViolation` if the graph contains a cycle.
    pub fn topological_order(&self) -> Result<Vec<NodeIndex>> {
        toposort(&self.graph, None).map_err(|cycle| {
            let at = cycle.node_id();
            match self.find_cycle_pair() {
                Some((from, to)) => {
                    Error::violation(Violation::Cycle, self.name(from), self.name(to))
                }
                None => Error::violation(Violation::Cycle, self.name(at), self.name(at)),
            }
        })
    }

    /// Computes the longest distance from every node to `target`.
    ///
    /// `order` must be a topological order of this graph, as returned by
    /// [`DependencyGraph::topological_order`].
    pub fn longest_paths_to(&self, target: NodeIndex, order: &[NodeIndex]) -> LongestPaths {
        let mut distance: Vec<Option<usize>> = vec![None; self.graph.node_count()];
        distance[target.index()] = Some(0);

        for &node in order.iter().rev() {
            if node == target {
                continue;
            }
            distance[node.index()] = self
                .successors(node)
                .into_iter()
                .filter_map(|succ| distance[succ.index()])
                .max()
                .map(|d| d + 1);
        }

        LongestPaths { distance }
    }

    /// Longest simple path between two modules, by name.
    ///
    /// # Errors
    ///
    /// Returns an error if either module is unknown, the graph is cyclic, or
    /// `destination` is not reachable from `source`.
    pub fn longest_path(&self, source: &str, destination: &str) -> Result<Vec<String>> {
        let from = self.require(source)?;
        let to = self.require(destination)?;
        let order = self.topological_order()?;
        let paths = self.longest_paths_to(to, &order);
        let path = paths
            .path_from(self, from)
            .ok_or_else(|| Error::violation(Violation::MissingPath, source, destination))?;
        Ok(path.into_iter().map(|n| self.graph[n].clone()).collect())
    }
}

/// Longest distances to a single target in an acyclic graph.
#[derive(Debug, Clone)]
pub struct LongestPaths {
    distance: Vec<Option<usize>>,
}

impl LongestPaths {
    /// Number of hops on the longest path from `node`, if the target is reachable.
    pub fn distance_from(&self, node: NodeIndex) -> Option<usize> {
        self.distance.get(node.index()).copied().flatten()
    }

    /// Nodes on the longest path from `source`, both ends included.
    ///
    /// Among paths of equal length, the one that follows the earliest
    /// recorded successor at every step is returned.
    pub fn path_from(
        &self,
        graph: &DependencyGraph,
        source: NodeIndex,
    ) -> Option<Vec<NodeIndex>> {
        let mut remaining = self.distance_from(source)?;
        let mut path = vec![source];
        let mut current = source;

        while remaining > 0 {
            current = graph
                .successors(current)
                .into_iter()
                .find(|succ| self.distance_from(*succ) == Some(remaining - 1))?;
            remaining -= 1;
            path.push(current);
        }

        Some(path)
    }
}
