use crate::{Filter, FilterUpdate, StagingError, StagingResult};
use querycraft_assembler::QueryAssembler;
use querycraft_types::{CombinatorKind, Condition, Group};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A form-side group: one combinator applied to an ordered list of filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagingGroup {
    #[serde(default, alias = "logicOperator")]
    pub combinator: CombinatorKind,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

impl StagingGroup {
    /// A group with the given combinator and no filters.
    #[must_use]
    pub fn new(combinator: CombinatorKind) -> Self {
        Self {
            combinator,
            filters: Vec::new(),
        }
    }

    /// Builder-style filter append.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// `AND` with a single blank filter, as a form shows a new group.
impl Default for StagingGroup {
    fn default() -> Self {
        Self::new(CombinatorKind::And).with_filter(Filter::default())
    }
}

/// The editable groups of a query form.
///
/// Always holds at least one group. Serialized as a plain JSON array of
/// groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StagingGroup>", into = "Vec<StagingGroup>")]
pub struct FormStaging {
    groups: Vec<StagingGroup>,
}

impl FormStaging {
    /// A staging area with one blank `AND` group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: vec![StagingGroup::default()],
        }
    }

    /// Wraps existing groups. An empty list is rejected.
    pub fn from_groups(groups: Vec<StagingGroup>) -> StagingResult<Self> {
        if groups.is_empty() {
            return Err(StagingError::NoGroups);
        }
        Ok(Self { groups })
    }

    /// Parses a staging document (a JSON array of groups).
    pub fn from_json(json: &str) -> StagingResult<Self> {
        let groups: Vec<StagingGroup> = serde_json::from_str(json)?;
        Self::from_groups(groups)
    }

    #[must_use]
    pub fn groups(&self) -> &[StagingGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> StagingResult<&StagingGroup> {
        let len = self.groups.len();
        self.groups
            .get(index)
            .ok_or(StagingError::GroupOutOfRange { index, len })
    }

    fn group_mut(&mut self, index: usize) -> StagingResult<&mut StagingGroup> {
        let len = self.groups.len();
        self.groups
            .get_mut(index)
            .ok_or(StagingError::GroupOutOfRange { index, len })
    }

    /// Appends a blank `AND` group and returns its index.
    pub fn add_group(&mut self) -> usize {
        self.groups.push(StagingGroup::default());
        self.groups.len() - 1
    }

    /// Appends a blank filter to `group` and returns the filter's index.
    pub fn add_filter(&mut self, group: usize) -> StagingResult<usize> {
        let g = self.group_mut(group)?;
        g.filters.push(Filter::default());
        Ok(g.filters.len() - 1)
    }

    /// Applies `update` to one filter and returns the updated filter.
    pub fn update_filter(
        &mut self,
        group: usize,
        filter: usize,
        update: FilterUpdate,
    ) -> StagingResult<&Filter> {
        let g = self.group_mut(group)?;
        let len = g.filters.len();
        let target = g.filters.get_mut(filter).ok_or(StagingError::FilterOutOfRange {
            group,
            index: filter,
            len,
        })?;
        target.apply(update);
        Ok(target)
    }

    pub fn set_combinator(
        &mut self,
        group: usize,
        combinator: CombinatorKind,
    ) -> StagingResult<()> {
        self.group_mut(group)?.combinator = combinator;
        Ok(())
    }

    /// Back to a single blank `AND` group.
    pub fn reset(&mut self) {
        debug!(groups = self.groups.len(), "resetting staging");
        *self = Self::new();
    }

    /// Total number of filters across all groups.
    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.groups.iter().map(|g| g.filters.len()).sum()
    }

    /// Every filter in group order, paired with its group's combinator.
    pub fn flatten(&self) -> impl Iterator<Item = (Condition, CombinatorKind)> + '_ {
        self.groups.iter().flat_map(|g| {
            g.filters
                .iter()
                .map(move |f| (f.to_condition(), g.combinator))
        })
    }

    /// Clears `assembler`, feeds it the flattened filters and returns both
    /// output forms.
    pub fn build(&self, assembler: &mut QueryAssembler) -> BuiltQuery {
        debug!(
            groups = self.groups.len(),
            filters = self.filter_count(),
            "building query"
        );
        assembler.clear();
        assembler.extend(self.flatten());
        BuiltQuery::from_assembler(assembler)
    }
}

impl Default for FormStaging {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<StagingGroup>> for FormStaging {
    type Error = StagingError;

    fn try_from(groups: Vec<StagingGroup>) -> Result<Self, Self::Error> {
        Self::from_groups(groups)
    }
}

impl From<FormStaging> for Vec<StagingGroup> {
    fn from(staging: FormStaging) -> Self {
        staging.groups
    }
}

/// The two read-back forms of an assembled query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub expression: String,
    pub rules: Vec<Group>,
}

impl BuiltQuery {
    #[must_use]
    pub fn from_assembler(assembler: &QueryAssembler) -> Self {
        Self {
            expression: assembler.to_expression_string(),
            rules: assembler.to_structured_query(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
