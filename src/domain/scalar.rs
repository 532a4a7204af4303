use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A caller-supplied value that may arrive as either text or a number.
///
/// Displays exactly as given: `10` stays `10`, `"10.5"` stays `10.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Empty text counts as "not supplied". Any number is a value.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Text(s) => s.is_empty(),
            Scalar::Number(_) => false,
        }
    }

    /// Strict numeric coercion. Text must parse as a float in full.
    pub fn to_f64(&self, field: &str) -> Result<f64, TemplateError> {
        let parsed = match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
        };

        parsed
            .filter(|v| v.is_finite())
            .ok_or_else(|| TemplateError::InvalidAmount {
                field: field.to_string(),
                value: self.to_string(),
            })
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(n) => match n.as_f64() {
                // `20.0` reads back as `20`, the way integers display.
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER => {
                    write!(f, "{}", v as i64)
                }
                _ => n.fmt(f),
            },
            Scalar::Text(s) => s.fmt(f),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        // Whole floats display without a fractional part, as integers do.
        if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
            return Scalar::Number((n as i64).into());
        }
        match serde_json::Number::from_f64(n) {
            Some(number) => Scalar::Number(number),
            None => Scalar::Text(n.to_string()),
        }
    }
}
