// src/graph/store.rs
//! The immutable full interaction graph.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{Account, CoreSet, InteractionEvent, TimeBounds};

/// Accounts plus the multiset of raw interaction events between them.
///
/// Never mutated once built; filtering produces a new graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullGraph {
    accounts: BTreeMap<String, Account>,
    events: Vec<InteractionEvent>,
}

impl FullGraph {
    /// Builds a graph. Event endpoints without an account get a bare one.
    #[must_use]
    pub fn new(accounts: Vec<Account>, events: Vec<InteractionEvent>) -> Self {
        let mut map: BTreeMap<String, Account> = accounts
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect();

        for event in &events {
            for id in [&event.source, &event.target] {
                if !map.contains_key(id) {
                    map.insert(id.clone(), Account::bare(id.as_str()));
                }
            }
        }

        Self {
            accounts: map,
            events,
        }
    }

    /// Marks core accounts and adds any core id the graph does not know yet.
    #[must_use]
    pub fn with_core(mut self, core: &CoreSet) -> Self {
        for account in self.accounts.values_mut() {
            account.is_core = core.contains(&account.id);
        }
        for id in core.iter() {
            self.accounts.entry(id.to_string()).or_insert_with(|| {
                let mut a = Account::bare(id);
                a.is_core = true;
                a
            });
        }
        self
    }

    /// Induced subgraph on `keep`: accounts in `keep`, events with both ends in `keep`.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn retain(&self, keep: &HashSet<&str>) -> Self {
        let accounts = self
            .accounts
            .iter()
            .filter(|(id, _)| keep.contains(id.as_str()))
            .map(|(id, a)| (id.clone(), a.clone()))
            .collect();
        let events = self
            .events
            .iter()
            .filter(|e| keep.contains(e.source.as_str()) && keep.contains(e.target.as_str()))
            .cloned()
            .collect();
        Self { accounts, events }
    }

    #[must_use]
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Accounts in ascending id order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    #[must_use]
    pub fn events(&self) -> &[InteractionEvent] {
        &self.events
    }

    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// Earliest and latest event timestamps; `(0, 0)` when there are no events.
    #[must_use]
    pub fn time_bounds(&self) -> TimeBounds {
        let mut iter = self.events.iter().map(|e| e.timestamp);
        let Some(first) = iter.next() else {
            return TimeBounds::default();
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        TimeBounds { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    fn ev(s: &str, t: &str, ts: i64) -> InteractionEvent {
        InteractionEvent::new(s, t, ts, "X")
    }

    #[test]
    fn test_implicit_accounts_for_event_endpoints() {
        let g = FullGraph::new(vec![Account::bare("A")], vec![ev("B", "A", 1)]);
        assert!(g.contains("A"));
        assert!(g.contains("B"));
        assert_eq!(g.account_count(), 2);
    }

    #[test]
    fn test_with_core_adds_missing_core_ids() -> Result<()> {
        let core = CoreSet::parse("A,Z")?;
        let g = FullGraph::new(vec![Account::bare("A")], vec![]).with_core(&core);
        assert!(g.account("Z").is_some_and(|a| a.is_core));
        assert!(g.account("A").is_some_and(|a| a.is_core));
        Ok(())
    }

    #[test]
    fn test_retain_drops_dangling_events() {
        let g = FullGraph::new(vec![], vec![ev("A", "B", 1), ev("B", "C", 2)]);
        let keep: HashSet<&str> = ["A", "B"].into_iter().collect();
        let sub = g.retain(&keep);
        assert_eq!(sub.account_count(), 2);
        assert_eq!(sub.events().len(), 1);
    }

    #[test]
    fn test_time_bounds() {
        let g = FullGraph::new(vec![], vec![ev("A", "B", 7), ev("B", "C", 3), ev("C", "A", 9)]);
        assert_eq!(g.time_bounds(), TimeBounds { min: 3, max: 9 });
        assert_eq!(FullGraph::default().time_bounds(), TimeBounds::default());
    }
}
