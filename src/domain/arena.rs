//! Arena-backed state space of the replacement decision tree.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Reference to a node stored in a [`StateSpace`].
pub type NodeId = Index;

/// Machine of a given age at a given decision year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode {
    /// Years in service since the last replacement
    pub machine_age: usize,
    /// 1-based decision year, `decision_years + 1` for horizon nodes
    pub decision_year: usize,
    /// State reached by keeping the machine, None at max age
    pub keep_successor: Option<NodeId>,
    /// State reached by replacing the machine (age 1, next year)
    pub replace_successor: Option<NodeId>,
}

impl StateNode {
    fn new(machine_age: usize, decision_year: usize) -> Self {
        Self {
            machine_age,
            decision_year,
            keep_successor: None,
            replace_successor: None,
        }
    }

    /// True if the node sits past the last decision year.
    pub fn is_horizon(&self) -> bool {
        self.keep_successor.is_none() && self.replace_successor.is_none()
    }
}

impl fmt::Display for StateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={} (year {})", self.machine_age, self.decision_year)
    }
}

/// All states reachable from the initial state, grouped by decision year.
///
/// Every (age, year) pair is stored once; successor links of different
/// parents point to the same node. `years[i]` holds the states of decision
/// year `i + 1`, `horizon` the states one year past the last decision.
#[derive(Debug, Default, Clone)]
pub struct StateSpace {
    arena: Arena<StateNode>,
    years: Vec<Vec<NodeId>>,
    horizon: Vec<NodeId>,
    root: Option<NodeId>,
}

impl StateSpace {
    pub fn new(decision_years: usize) -> Self {
        Self {
            arena: Arena::new(),
            years: vec![Vec::new(); decision_years],
            horizon: Vec::new(),
            root: None,
        }
    }

    /// Return the node for (age, year), inserting it if not yet present.
    ///
    /// Membership is decided by value, never by node identity.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn intern(&mut self, machine_age: usize, decision_year: usize) -> NodeId {
        if let Some(existing) = self.find(machine_age, decision_year) {
            return existing;
        }
        let idx = self.arena.insert(StateNode::new(machine_age, decision_year));
        self.collection_mut(decision_year).push(idx);
        idx
    }

    pub(crate) fn set_root(&mut self, idx: NodeId) {
        self.root = Some(idx);
    }

    pub(crate) fn get_node_mut(&mut self, idx: NodeId) -> Option<&mut StateNode> {
        self.arena.get_mut(idx)
    }

    /// Sort every collection by ascending machine age.
    pub(crate) fn sort_by_age(&mut self) {
        let arena = &self.arena;
        let key = |idx: &NodeId| arena.get(*idx).map(|n| n.machine_age);
        for year in &mut self.years {
            year.sort_by_key(key);
        }
        self.horizon.sort_by_key(key);
    }

    fn collection(&self, decision_year: usize) -> &[NodeId] {
        match decision_year.checked_sub(1) {
            Some(i) if i < self.years.len() => &self.years[i],
            _ => &self.horizon,
        }
    }

    fn collection_mut(&mut self, decision_year: usize) -> &mut Vec<NodeId> {
        match decision_year.checked_sub(1) {
            Some(i) if i < self.years.len() => &mut self.years[i],
            _ => &mut self.horizon,
        }
    }

    /// Node with exactly this (age, year) pair, if reachable.
    pub fn find(&self, machine_age: usize, decision_year: usize) -> Option<NodeId> {
        self.collection(decision_year)
            .iter()
            .copied()
            .find(|&idx| {
                self.arena.get(idx).is_some_and(|n| {
                    n.machine_age == machine_age && n.decision_year == decision_year
                })
            })
    }

    pub fn get_node(&self, idx: NodeId) -> Option<&StateNode> {
        self.arena.get(idx)
    }

    /// Initial state, None when the horizon is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of decision years.
    pub fn decision_years(&self) -> usize {
        self.years.len()
    }

    /// States of the decision year with 0-based index `index`, sorted by age.
    pub fn year(&self, index: usize) -> impl Iterator<Item = &StateNode> + '_ {
        self.years
            .get(index)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.arena.get(idx))
    }

    /// Machine ages reachable in the decision year with 0-based index `index`.
    pub fn ages(&self, index: usize) -> Vec<usize> {
        self.year(index).map(|n| n.machine_age).collect()
    }

    /// States one year past the last decision.
    pub fn horizon(&self) -> impl Iterator<Item = &StateNode> + '_ {
        self.horizon.iter().filter_map(|&idx| self.arena.get(idx))
    }

    /// Total number of distinct states, horizon included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_same_pair_twice_when_interning_then_returns_same_node() {
        let mut space = StateSpace::new(2);
        let a = space.intern(1, 2);
        let b = space.intern(1, 2);

        assert_eq!(a, b);
        assert_eq!(space.len(), 1);
        assert_eq!(space.ages(1), vec![1]);
    }

    #[test]
    fn given_year_past_last_decision_when_interning_then_goes_to_horizon() {
        let mut space = StateSpace::new(2);
        space.intern(4, 3);

        assert!(space.ages(0).is_empty());
        assert!(space.ages(1).is_empty());
        assert_eq!(space.horizon().count(), 1);
        assert!(space.find(4, 3).is_some());
    }

    #[test]
    fn given_unsorted_inserts_when_sorting_then_orders_by_age() {
        let mut space = StateSpace::new(1);
        space.intern(5, 1);
        space.intern(1, 1);
        space.intern(3, 1);

        space.sort_by_age();

        assert_eq!(space.ages(0), vec![1, 3, 5]);
    }
}
