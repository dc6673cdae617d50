//! Expression string rendering.

use querycraft_types::Group;

/// Joiner placed between rendered groups. Groups are always conjunctive.
pub const GROUP_JOINER: &str = " && ";

/// Renders one group as `(c1 OP c2 OP ...)`, `OP` being the group's
/// combinator symbol.
#[must_use]
pub fn render_group(group: &Group) -> String {
    let joiner = format!(" {} ", group.operator().symbol());
    let body = group
        .conditions()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&joiner);
    format!("({body})")
}

/// Renders a whole query. An empty query renders as the empty string.
#[must_use]
pub fn render_query(groups: &[Group]) -> String {
    groups
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join(GROUP_JOINER)
}
