use crate::{BuiltQuery, FormStaging};
use querycraft_assembler::QueryAssembler;
use tracing::info;

/// A query form's whole state: the editable staging groups, the assembler
/// and the outputs of the most recent build.
///
/// Edits to the staging do not touch the outputs until [`build`](Self::build)
/// runs again.
#[derive(Debug, Clone, Default)]
pub struct QuerySession {
    staging: FormStaging,
    assembler: QueryAssembler,
    built: BuiltQuery,
}

impl QuerySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_staging(staging: FormStaging) -> Self {
        Self {
            staging,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn staging(&self) -> &FormStaging {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut FormStaging {
        &mut self.staging
    }

    /// Rebuilds the outputs from the current staging.
    pub fn build(&mut self) -> &BuiltQuery {
        self.built = self.staging.build(&mut self.assembler);
        info!(
            groups = self.built.rules.len(),
            expression = %self.built.expression,
            "query built"
        );
        &self.built
    }

    /// Resets the staging to one blank group and empties every output.
    pub fn clear_query(&mut self) {
        self.staging.reset();
        self.assembler.clear();
        self.built = BuiltQuery::default();
    }

    /// Expression string from the last build.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.built.expression
    }

    #[must_use]
    pub fn built(&self) -> &BuiltQuery {
        &self.built
    }
}
