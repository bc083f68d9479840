use crate::features::Severity;
use serde::{Deserialize, Serialize};

/// Classification thresholds. Each bound is inclusive on the side of the
/// heavier class, so an index of exactly 18.5 is Normal, not Underweight.
pub const UNDERWEIGHT_CEILING: f64 = 18.5;
pub const NORMAL_CEILING: f64 = 25.0;
pub const OVERWEIGHT_CEILING: f64 = 30.0;

/// Raw measurements for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum BmiError {
    #[error("weight must be a positive number of kilograms (got {0})")]
    InvalidWeight(f64),
    #[error("height must be a positive number of centimeters (got {0})")]
    InvalidHeight(f64),
}

/// Weight class derived from the body-mass index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl WeightClass {
    pub fn from_index(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_CEILING {
            WeightClass::Underweight
        } else if bmi < NORMAL_CEILING {
            WeightClass::Normal
        } else if bmi < OVERWEIGHT_CEILING {
            WeightClass::Overweight
        } else {
            WeightClass::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeightClass::Underweight => "Underweight",
            WeightClass::Normal => "Normal weight",
            WeightClass::Overweight => "Overweight",
            WeightClass::Obese => "Obese",
        }
    }

    /// Display channel the companion UI uses for this class.
    pub fn severity(self) -> Severity {
        match self {
            WeightClass::Underweight => Severity::Info,
            WeightClass::Normal => Severity::Success,
            WeightClass::Overweight => Severity::Warning,
            WeightClass::Obese => Severity::Error,
        }
    }
}

/// Computed index plus its classification. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub class: WeightClass,
}

impl BmiReading {
    /// The index rendered to two decimal places.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.bmi)
    }

    /// The index rounded to two decimal places, for numeric payloads.
    pub fn rounded(&self) -> f64 {
        (self.bmi * 100.0).round() / 100.0
    }
}

/// Evaluate a reading. Both guards run before any arithmetic, so a zero
/// height is rejected as [`BmiError::InvalidHeight`] and can never reach
/// the division.
pub fn evaluate(input: BmiInput) -> Result<BmiReading, BmiError> {
    if !input.weight_kg.is_finite() || input.weight_kg <= 0.0 {
        return Err(BmiError::InvalidWeight(input.weight_kg));
    }
    if !input.height_cm.is_finite() || input.height_cm <= 0.0 {
        return Err(BmiError::InvalidHeight(input.height_cm));
    }

    let height_m = input.height_cm / 100.0;
    let bmi = input.weight_kg / height_m.powi(2);

    Ok(BmiReading {
        bmi,
        class: WeightClass::from_index(bmi),
    })
}
