//! Decision tree construction: enumerates every reachable (age, year) state.

use tracing::{debug, instrument, trace};

use crate::domain::arena::{NodeId, StateSpace};
use crate::domain::model::{Model, INITIAL_DECISION_YEAR};

/// Builds the [`StateSpace`] of a model by depth-first recursion from the
/// initial state.
///
/// Every path of the decision tree is walked, so construction visits
/// O(2^decision_years) nodes before deduplication; the stored state space
/// stays at O(max_age) states per year.
#[derive(Debug, Default)]
pub struct StateSpaceBuilder {
    visits: usize,
}

impl StateSpaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recursion steps taken by the last [`build`](Self::build).
    pub fn visits(&self) -> usize {
        self.visits
    }

    #[instrument(level = "debug", skip_all, fields(years = model.decision_years()))]
    pub fn build(&mut self, model: &Model) -> StateSpace {
        self.visits = 0;
        let mut space = StateSpace::new(model.decision_years());

        if model.decision_years() >= INITIAL_DECISION_YEAR {
            let root = space.intern(model.initial_age(), INITIAL_DECISION_YEAR);
            space.set_root(root);
            self.fill_path(model, &mut space, root, model.initial_age(), INITIAL_DECISION_YEAR);
        }
        space.sort_by_age();

        debug!(
            visits = self.visits,
            states = space.len(),
            "built decision tree"
        );
        space
    }

    fn fill_path(
        &mut self,
        model: &Model,
        space: &mut StateSpace,
        node: NodeId,
        machine_age: usize,
        decision_year: usize,
    ) {
        self.visits += 1;
        if decision_year > model.decision_years() {
            return;
        }
        trace!(machine_age, decision_year, "visit");

        let next_year = decision_year + 1;

        let keep_age = machine_age + 1;
        let keep = if keep_age <= model.max_age() {
            let child = space.intern(keep_age, next_year);
            self.fill_path(model, space, child, keep_age, next_year);
            Some(child)
        } else {
            None
        };

        let replace = space.intern(1, next_year);
        self.fill_path(model, space, replace, 1, next_year);

        if let Some(current) = space.get_node_mut(node) {
            current.keep_successor = keep;
            current.replace_successor = Some(replace);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DataRow;

    fn model(years: i64, initial: i64, max: i64) -> Model {
        let data = (0..=max).map(|_| DataRow::new(10, 1, 5)).collect();
        Model::new(years, initial, max, 20, data).unwrap()
    }

    #[test]
    fn given_empty_horizon_when_building_then_no_states() {
        let mut builder = StateSpaceBuilder::new();
        let space = builder.build(&model(0, 0, 3));

        assert!(space.is_empty());
        assert!(space.root().is_none());
        assert_eq!(space.decision_years(), 0);
    }

    #[test]
    fn given_single_year_when_building_then_root_links_to_horizon() {
        let mut builder = StateSpaceBuilder::new();
        let space = builder.build(&model(1, 2, 3));

        let root = space.get_node(space.root().unwrap()).unwrap();
        let keep = space.get_node(root.keep_successor.unwrap()).unwrap();
        let replace = space.get_node(root.replace_successor.unwrap()).unwrap();

        assert_eq!((keep.machine_age, keep.decision_year), (3, 2));
        assert_eq!((replace.machine_age, replace.decision_year), (1, 2));
        assert!(keep.is_horizon());
        assert_eq!(space.ages(0), vec![2]);
    }

    #[test]
    fn given_three_years_when_building_then_recursion_walks_every_path() {
        let mut builder = StateSpaceBuilder::new();
        builder.build(&model(3, 1, 10));

        // full binary tree of depth 3: 1 + 2 + 4 + 8 visits
        assert_eq!(builder.visits(), 15);
    }
}
