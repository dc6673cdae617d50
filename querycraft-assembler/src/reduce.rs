//! The merge-on-insert rule, as a plain fold over a group list.

use querycraft_types::{CombinatorKind, Condition, Group};

/// Folds one condition into `groups`.
///
/// Appends to the last group when its combinator equals `combinator`,
/// otherwise pushes a new single-condition group. Earlier groups are never
/// touched or reordered.
#[must_use]
pub fn push_condition(
    mut groups: Vec<Group>,
    condition: Condition,
    combinator: CombinatorKind,
) -> Vec<Group> {
    match groups.last_mut() {
        Some(last) if last.operator() == combinator => last.push(condition),
        _ => groups.push(Group::new(condition, combinator)),
    }
    groups
}

/// Folds a whole stream of `(condition, combinator)` pairs, starting from
/// an empty query.
#[must_use]
pub fn fold_conditions<I>(pairs: I) -> Vec<Group>
where
    I: IntoIterator<Item = (Condition, CombinatorKind)>,
{
    pairs
        .into_iter()
        .fold(Vec::new(), |groups, (condition, combinator)| {
            push_condition(groups, condition, combinator)
        })
}
