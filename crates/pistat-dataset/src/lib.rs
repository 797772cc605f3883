//! Clinical data tables for the pain-index analyses.
//!
//! A [`Cohort`] bundles the three inputs every analysis run reads:
//!
//! - **Phase tables** ([`PhaseTable`]): patient counts per pulsatility index (PI)
//!   level for the intercritical, frequent-crisis and critical phases
//! - **NRS groups** ([`NrsTable`]): pain-intensity scores of the patients at each PI level
//! - **Pain duration** ([`PainDurationTable`]): mean headache duration per PI level
//!
//! [`Cohort::builtin`] returns the literal clinical dataset. Any other cohort
//! can be loaded from JSON through `serde` and checked with
//! [`Cohort::validate`].

pub use self::{cohort::*, error::*, nrs::*, pain_duration::*, phase::*};

mod cohort;
mod error;
mod nrs;
mod pain_duration;
mod phase;
