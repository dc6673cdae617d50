use crate::{reduce, render};
use querycraft_types::{CombinatorKind, Condition, Group};
use std::fmt;
use tracing::{debug, trace};

/// Accumulates conditions into groups and renders the result.
///
/// Single-owner and synchronous. Reads are pure functions of the current
/// state, so repeated reads without an intervening `insert` or `clear`
/// return identical results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryAssembler {
    groups: Vec<Group>,
}

impl QueryAssembler {
    /// Creates an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `condition`, related to the previous one by `combinator`.
    pub fn insert(&mut self, condition: Condition, combinator: CombinatorKind) {
        let merges = self
            .groups
            .last()
            .is_some_and(|last| last.operator() == combinator);
        trace!(
            field = %condition.field,
            operator = %condition.operator,
            combinator = %combinator,
            merges,
            "insert condition"
        );
        let groups = std::mem::take(&mut self.groups);
        self.groups = reduce::push_condition(groups, condition, combinator);
    }

    /// Accepts `condition` with the default `AND` combinator.
    pub fn insert_and(&mut self, condition: Condition) {
        self.insert(condition, CombinatorKind::default());
    }

    /// Drops every group.
    pub fn clear(&mut self) {
        debug!(groups = self.groups.len(), "clearing query");
        self.groups.clear();
    }

    /// Renders the query as an expression string; empty when there are no
    /// groups.
    #[must_use]
    pub fn to_expression_string(&self) -> String {
        render::render_query(&self.groups)
    }

    /// Returns an owned copy of the groups. Changing it does not affect the
    /// assembler.
    #[must_use]
    pub fn to_structured_query(&self) -> Vec<Group> {
        self.groups.clone()
    }

    /// Borrowed view of the groups.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

impl Extend<(Condition, CombinatorKind)> for QueryAssembler {
    fn extend<I: IntoIterator<Item = (Condition, CombinatorKind)>>(&mut self, iter: I) {
        for (condition, combinator) in iter {
            self.insert(condition, combinator);
        }
    }
}

impl FromIterator<(Condition, CombinatorKind)> for QueryAssembler {
    fn from_iter<I: IntoIterator<Item = (Condition, CombinatorKind)>>(iter: I) -> Self {
        Self {
            groups: reduce::fold_conditions(iter),
        }
    }
}

impl fmt::Display for QueryAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_expression_string())
    }
}
