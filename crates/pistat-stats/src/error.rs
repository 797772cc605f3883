use ::normality::Error as NormalityError;
use anofox_statistics::StatError;

/// Errors raised by the statistical procedures in this crate.
///
/// Every procedure validates its input up front and reports the first
/// violation it finds. Nothing is silently dropped or imputed.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("need at least {required} observations, got {actual}")]
    TooFewObservations { required: usize, actual: usize },
    #[display("at most {limit} observations are supported, got {actual}")]
    TooManyObservations { limit: usize, actual: usize },
    #[display("need at least {required} groups, got {actual}")]
    TooFewGroups { required: usize, actual: usize },
    #[display("group #{index} is empty")]
    EmptyGroup { index: usize },
    #[display("group label '{label}' appears more than once")]
    DuplicateLabel { label: String },
    #[display("sequences differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[display("input contains a non-finite value")]
    NonFiniteValue,
    #[display("all values are identical")]
    ConstantInput,
    #[display("within-group variance is zero")]
    ZeroVariance,
    #[display("probability must lie in (0, 1), got {value}")]
    InvalidProbability { value: f64 },
    #[display("invalid parameters for the {name} distribution")]
    Distribution { name: &'static str },
    /// The underlying statistics library rejected input that passed
    /// validation here.
    #[display("{test}: {message}")]
    Backend { test: &'static str, message: String },
}

impl StatsError {
    /// Maps an error of the hypothesis-test library, tagged with the test
    /// that raised it.
    pub(crate) fn from_anofox(test: &'static str) -> impl FnOnce(StatError) -> Self {
        move |error| match error {
            StatError::InsufficientData { needed, got } => Self::TooFewObservations {
                required: needed,
                actual: got,
            },
            StatError::EmptyData => Self::TooFewObservations {
                required: 1,
                actual: 0,
            },
            StatError::InvalidParameter(message) => Self::Backend { test, message },
        }
    }
}

impl From<NormalityError> for StatsError {
    fn from(error: NormalityError) -> Self {
        match error {
            NormalityError::InsufficientSampleSize { given, needed } => {
                Self::TooFewObservations {
                    required: needed,
                    actual: given,
                }
            }
            NormalityError::ExcessiveSampleSize { given, needed } => Self::TooManyObservations {
                limit: needed,
                actual: given,
            },
            NormalityError::ZeroRange => Self::ConstantInput,
            NormalityError::ContainsNaN => Self::NonFiniteValue,
            other => Self::Backend {
                test: "Shapiro-Wilk",
                message: other.to_string(),
            },
        }
    }
}

pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), StatsError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(StatsError::NonFiniteValue)
    }
}

pub(crate) fn ensure_min_len(values: &[f64], required: usize) -> Result<(), StatsError> {
    if values.len() < required {
        return Err(StatsError::TooFewObservations {
            required,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Rejects a sample whose values are all identical.
pub(crate) fn ensure_varies(values: &[f64]) -> Result<(), StatsError> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    if max > min {
        Ok(())
    } else {
        Err(StatsError::ConstantInput)
    }
}

pub(crate) fn ensure_probability(value: f64) -> Result<(), StatsError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidProbability { value })
    }
}
