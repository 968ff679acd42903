use std::fmt;

use serde_json::Value;

/// Upper bound on the number of items a collection holds, fixed at construction.
///
/// Any number that is not NaN is a bound, including zero, negative and
/// fractional ones. Construction keeps the leading items like a slice ending at
/// the bound (truncated toward zero, a negative end counts back from the
/// tail), while inserts compare the current length against the bound as is.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Capacity {
    // never NaN or +inf
    Bounded(f64),
    #[default]
    Unbounded,
}

const UNBOUNDED_LITERALS: [&str; 4] = ["inf", "infinity", "+inf", "unbounded"];

impl Capacity {
    pub fn bounded(max_size: usize) -> Self {
        Self::Bounded(max_size as f64)
    }

    /// Length at which an insert starts evicting.
    pub fn limit(&self) -> Option<usize> {
        match self {
            // `as` saturates, negative and -inf land on 0
            Self::Bounded(n) => Some(n.ceil() as usize),
            Self::Unbounded => None,
        }
    }

    #[inline(always)]
    pub fn is_reached(&self, len: usize) -> bool {
        match self {
            Self::Bounded(n) => len as f64 >= *n,
            Self::Unbounded => false,
        }
    }

    /// Keeps the leading elements up to the bound, the earliest ones survive.
    pub fn truncate<T>(&self, items: &mut Vec<T>) {
        let Self::Bounded(n) = self else {
            return;
        };

        let end = n.trunc();
        let keep = if end >= 0.0 {
            end as usize
        } else {
            items.len().saturating_sub(-end as usize)
        };
        items.truncate(keep);
    }

    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            log_warn!("expecting capacity to be a number, got NaN. Defaulting to unbounded.");
            return Self::Unbounded;
        }
        if value.is_infinite() && value.is_sign_positive() {
            return Self::Unbounded;
        }

        if value < 1.0 {
            log_warn!(
                "capacity {} is below 1, a bounded-last collection keeps only its newest item",
                value
            );
        }
        Self::Bounded(value)
    }

    /// Lenient parse used for INI values, never fails.
    pub fn from_str_lossy(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::Unbounded;
        }
        if UNBOUNDED_LITERALS
            .iter()
            .any(|literal| literal.eq_ignore_ascii_case(value))
        {
            return Self::Unbounded;
        }

        match value.parse::<f64>() {
            Ok(n) => Self::from_f64(n),
            Err(_) => {
                log_warn!(
                    "expecting capacity to be a number, got [{}]. Defaulting to unbounded.",
                    value
                );
                Self::Unbounded
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Unbounded,
            Value::Number(n) => Self::from_f64(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::from_str_lossy(s),
            other => {
                log_warn!(
                    "expecting capacity to be a number, got {}. Defaulting to unbounded.",
                    other
                );
                Self::Unbounded
            }
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{}", n),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}
