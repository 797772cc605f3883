use crate::Phase;

/// Structural problems that make a cohort unusable for analysis.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("no table for the {phase}")]
    MissingPhase { phase: Phase },
    #[display("more than one table for the {phase}")]
    DuplicatePhase { phase: Phase },
    #[display("{table} table is empty")]
    EmptyTable { table: String },
    #[display("NRS group '{label}' appears more than once")]
    DuplicateGroup { label: String },
}
