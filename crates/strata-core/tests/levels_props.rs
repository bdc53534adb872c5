// Rust guideline compliant 2026-10-19

//! Property-based tests for level propagation and pruning.
//!
//! Random acyclic module graphs are generated by only letting `m{i}` list
//! `m{j}` as a dependent when `i < j`; records are then shuffled so the
//! engine never sees them in topological order by accident.

use proptest::prelude::*;
use std::collections::HashMap;
use strata_core::{compute_levels, storage, ModuleCatalog, ModuleRecord};

fn name(i: usize) -> String {
    format!("m{}", i)
}

/// Generates a shuffled list of modules forming a DAG.
fn arb_dag() -> impl Strategy<Value = Vec<ModuleRecord>> {
    (1usize..12)
        .prop_flat_map(|n| {
            let pairs = n * (n - 1) / 2;
            (
                Just(n),
                prop::collection::vec(prop::bool::weighted(0.35), pairs),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
        })
        .prop_map(|(n, edges, order)| {
            let mut records: Vec<ModuleRecord> =
                (0..n).map(|i| ModuleRecord::new(name(i), "1.0.0")).collect();
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    if edges[k] {
                        records[i].dependents.push(name(j));
                    }
                    k += 1;
                }
            }
            order.into_iter().map(|i| records[i].clone()).collect()
        })
}

/// Index of a generated module name.
fn idx(name: &str) -> usize {
    name[1..].parse().expect("generated name")
}

/// Adjacency matrix of the recorded relations, by generated index.
fn adjacency(records: &[ModuleRecord]) -> Vec<Vec<bool>> {
    let n = records.len();
    let mut adj = vec![vec![false; n]; n];
    for record in records {
        for dependent in &record.dependents {
            adj[idx(&record.name)][idx(dependent)] = true;
        }
    }
    adj
}

/// Longest number of hops from any root to each module, plus one.
fn reference_levels(adj: &[Vec<bool>]) -> Vec<u32> {
    let n = adj.len();
    let mut levels = vec![1u32; n];
    for j in 0..n {
        for i in 0..j {
            if adj[i][j] {
                levels[j] = levels[j].max(levels[i] + 1);
            }
        }
    }
    levels
}

/// `paths[i][j]` is the longest hop count from `i` to `j`, 0 when unreachable.
fn longest_hops(adj: &[Vec<bool>]) -> Vec<Vec<usize>> {
    let n = adj.len();
    let mut hops = vec![vec![0usize; n]; n];
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            if !adj[i][k] {
                continue;
            }
            hops[i][k] = hops[i][k].max(1);
            for j in (k + 1)..n {
                if hops[k][j] > 0 {
                    hops[i][j] = hops[i][j].max(hops[k][j] + 1);
                }
            }
        }
    }
    hops
}

fn levels_by_name(records: &[ModuleRecord]) -> HashMap<String, u32> {
    records.iter().map(|r| (r.name.clone(), r.level)).collect()
}

proptest! {
    /// Every module's level is one more than its longest dependency chain.
    #[test]
    fn prop_level_is_longest_chain(original in arb_dag()) {
        let adj = adjacency(&original);
        let expected = reference_levels(&adj);

        let mut records = original.clone();
        compute_levels(&mut records).expect("DAG input");

        for record in &records {
            prop_assert_eq!(record.level, expected[idx(&record.name)], "{}", record.name);
        }
    }

    /// Modules nothing depends on within the set sit at level 1.
    #[test]
    fn prop_roots_at_level_one(original in arb_dag()) {
        let adj = adjacency(&original);
        let mut records = original.clone();
        compute_levels(&mut records).expect("DAG input");

        for record in &records {
            let j = idx(&record.name);
            if (0..adj.len()).all(|i| !adj[i][j]) {
                prop_assert_eq!(record.level, 1);
            }
        }
    }

    /// Surviving relations strictly increase the level.
    #[test]
    fn prop_surviving_edges_increase_level(original in arb_dag()) {
        let mut records = original.clone();
        compute_levels(&mut records).expect("DAG input");
        let levels = levels_by_name(&records);

        for record in &records {
            for dependent in &record.dependents {
                prop_assert!(levels[dependent] > record.level);
            }
        }
    }

    /// A relation survives exactly when no longer path connects the pair.
    #[test]
    fn prop_pruning_matches_alternative_paths(original in arb_dag()) {
        let adj = adjacency(&original);
        let hops = longest_hops(&adj);
        let mut records = original.clone();
        compute_levels(&mut records).expect("DAG input");
        let pruned = adjacency(&records);

        for i in 0..adj.len() {
            for j in 0..adj.len() {
                if adj[i][j] {
                    prop_assert_eq!(pruned[i][j], hops[i][j] == 1, "m{} -> m{}", i, j);
                } else {
                    prop_assert!(!pruned[i][j], "pruning never adds relations");
                }
            }
        }
    }

    /// Each pruned relation is witnessed by a direct dependent reaching the destination.
    #[test]
    fn prop_pruned_relations_have_witness(original in arb_dag()) {
        let adj = adjacency(&original);
        let hops = longest_hops(&adj);
        let mut records = original.clone();
        let report = compute_levels(&mut records).expect("DAG input");

        for relation in &report.pruned {
            let s = idx(&relation.source);
            let w = idx(&relation.intermediate);
            let d = idx(&relation.destination);
            prop_assert!(adj[s][w], "witness is a direct dependent");
            prop_assert!(hops[w][d] > 0, "witness reaches the destination");
        }
    }

    /// Running again on pruned records removes nothing and keeps every level.
    #[test]
    fn prop_pruning_is_idempotent(original in arb_dag()) {
        let mut records = original.clone();
        compute_levels(&mut records).expect("DAG input");
        let first = records.clone();

        let report = compute_levels(&mut records).expect("Pruned DAG input");

        prop_assert!(report.pruned.is_empty());
        prop_assert_eq!(records, first);
    }

    /// Listing every dependent twice changes neither levels nor the pruned result.
    #[test]
    fn prop_repeated_dependents_settle_in_one_run(original in arb_dag()) {
        let mut clean = original.clone();
        compute_levels(&mut clean).expect("DAG input");

        let mut doubled = original.clone();
        for record in &mut doubled {
            let copy = record.dependents.clone();
            record.dependents.extend(copy);
        }
        compute_levels(&mut doubled).expect("DAG input with repeats");

        prop_assert_eq!(&doubled, &clean);
        let report = compute_levels(&mut doubled).expect("Pruned input");
        prop_assert!(report.pruned.is_empty());
    }

    /// Levels survive a JSON round trip followed by recomputation.
    #[test]
    fn prop_round_trip_keeps_levels(original in arb_dag()) {
        let mut records = original.clone();
        compute_levels(&mut records).expect("DAG input");
        strata_core::sort_by_level(&mut records);
        let catalog = ModuleCatalog::new(records);

        let json = storage::to_pretty_json(&catalog).expect("serializable");
        let mut reloaded: ModuleCatalog = serde_json::from_slice(&json).expect("parseable");
        for record in &mut reloaded.modules {
            record.level = 1;
        }
        compute_levels(&mut reloaded.modules).expect("Reloaded DAG");

        prop_assert_eq!(levels_by_name(&reloaded.modules), levels_by_name(&catalog.modules));
    }
}
