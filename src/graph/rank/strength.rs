// src/graph/rank/strength.rs
//! Connection strength: the weakest link between a node and the core set.

use std::collections::{BTreeMap, HashMap};

use crate::types::{CoreSet, InteractionEvent};

/// Strength per non-core node, keyed by id.
pub type StrengthMap = BTreeMap<String, u64>;

/// Computes the connection strength of every non-core node in `nodes`.
///
/// Strength is the minimum, over all core nodes, of the number of events
/// between the node and that core node in either direction.
pub fn compute<'a, N, E>(nodes: N, events: E, core: &CoreSet) -> StrengthMap
where
    N: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = &'a InteractionEvent>,
{
    let counts = count_core_links(events, core);

    nodes
        .into_iter()
        .filter(|n| !core.contains(n))
        .map(|node| {
            let strength = core
                .iter()
                .map(|c| counts.get(&(node, c)).copied().unwrap_or(0))
                .min()
                .unwrap_or(0);
            (node.to_string(), strength)
        })
        .collect()
}

/// Event counts keyed by `(non-core, core)`.
fn count_core_links<'a, E>(events: E, core: &CoreSet) -> HashMap<(&'a str, &'a str), u64>
where
    E: IntoIterator<Item = &'a InteractionEvent>,
{
    let mut counts = HashMap::new();
    for event in events {
        let (s, t) = (event.source.as_str(), event.target.as_str());
        match (core.contains(s), core.contains(t)) {
            (false, true) => *counts.entry((s, t)).or_insert(0) += 1,
            (true, false) => *counts.entry((t, s)).or_insert(0) += 1,
            _ => {}
        }
    }
    counts
}

/// Orders nodes strongest first; equal strengths fall back to ascending id.
#[must_use]
pub fn ranked(strengths: &StrengthMap) -> Vec<(String, u64)> {
    let mut out: Vec<_> = strengths.iter().map(|(id, s)| (id.clone(), *s)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
