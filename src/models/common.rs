use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A numeric field as typed by a user: either a JSON number or free text from a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
    /// Anything else a client sent (booleans, arrays, objects); never a parse failure.
    Other(Value),
}

impl Measure {
    /// Numeric value with form-input coercion. Blank text counts as 0,
    /// anything that is not a finite number yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Measure::Number(value) => Some(*value),
            Measure::Text(text) => parse_numeric_text(text),
            Measure::Other(value) => coerce_value(value),
        };
        value.filter(|value| value.is_finite())
    }

    /// Whether the field counts as filled in: non-zero numbers, non-empty text,
    /// `true`, and any array or object.
    pub fn is_filled(&self) -> bool {
        match self {
            Measure::Number(value) => *value != 0.0 && !value.is_nan(),
            Measure::Text(text) => !text.is_empty(),
            Measure::Other(Value::Bool(flag)) => *flag,
            Measure::Other(Value::Null) => false,
            Measure::Other(_) => true,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(value) => write!(f, "{}", format_kg(*value)),
            Measure::Text(text) => write!(f, "{}", text),
            Measure::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Number(value)
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Text(value.to_string())
    }
}

/// Booleans count as 1/0 and a one-element array as its element; other shapes are not numbers.
fn coerce_value(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_numeric_text(text),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [item @ (Value::Number(_) | Value::String(_) | Value::Null)] => coerce_value(item),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // Radix prefixes are only accepted unsigned.
    if sign > 0.0 && !trimmed.starts_with('+') {
        for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
            if let Some(digits) = unsigned.strip_prefix(prefix) {
                return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
            }
        }
    }

    let is_decimal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal || !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    unsigned.parse::<f64>().ok().map(|value| sign * value)
}

/// Renders a kilogram value the way the dashboard shows it: `20`, `102.5`.
pub fn format_kg(value: f64) -> String {
    if value.fract().abs() > f64::EPSILON {
        format!("{}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// One performed set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<Measure>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
impl ExerciseSet {
    pub fn new(weight: impl Into<Measure>, reps: impl Into<Measure>) -> Self {
        Self {
            weight: Some(weight.into()),
            reps: Some(reps.into()),
            extra: Map::new(),
        }
    }
}

/// What a record knows about the previous session.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseHistory {
    /// The single weight/reps/sets-count shape written by the workout log form.
    /// Records that arrive with an empty `sets` array are read through this shape too,
    /// keeping the raw `sets` value for the response.
    LegacyFlat {
        weight: Option<Measure>,
        reps: Option<Measure>,
        sets: Option<Value>,
    },
    /// An ordered, non-empty list of performed sets.
    SetBased { sets: Vec<ExerciseSet> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ExerciseRecordWire {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reps: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sets: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// One exercise within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseRecordWire", into = "ExerciseRecordWire")]
pub struct ExerciseRecord {
    pub name: String,
    pub history: ExerciseHistory,
    /// Caller fields the coach does not interpret, passed through untouched.
    pub extra: Map<String, Value>,
}

#[cfg(test)]
impl ExerciseRecord {
    pub fn flat(name: &str, weight: impl Into<Measure>, reps: impl Into<Measure>, sets: impl Into<Measure>) -> Self {
        let sets = serde_json::to_value(sets.into()).unwrap_or(Value::Null);
        Self {
            name: name.to_string(),
            history: ExerciseHistory::LegacyFlat {
                weight: Some(weight.into()),
                reps: Some(reps.into()),
                sets: Some(sets),
            },
            extra: Map::new(),
        }
    }

    pub fn with_sets(name: &str, sets: Vec<ExerciseSet>) -> Self {
        let history = if sets.is_empty() {
            ExerciseHistory::LegacyFlat {
                weight: None,
                reps: None,
                sets: Some(Value::Array(Vec::new())),
            }
        } else {
            ExerciseHistory::SetBased { sets }
        };

        Self {
            name: name.to_string(),
            history,
            extra: Map::new(),
        }
    }
}

impl TryFrom<ExerciseRecordWire> for ExerciseRecord {
    type Error = serde_json::Error;

    fn try_from(wire: ExerciseRecordWire) -> Result<Self, Self::Error> {
        let ExerciseRecordWire {
            name,
            weight,
            reps,
            sets,
            mut extra,
        } = wire;

        let history = match sets {
            Some(Value::Array(items)) if !items.is_empty() => {
                // The flat fields are not consulted once sets exist, but stay on the record.
                if let Some(weight) = weight {
                    extra.insert("weight".to_string(), serde_json::to_value(weight)?);
                }
                if let Some(reps) = reps {
                    extra.insert("reps".to_string(), serde_json::to_value(reps)?);
                }
                // A set that is not an object has no readable weight.
                let sets = items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(_) => serde_json::from_value(item),
                        _ => Ok(ExerciseSet::default()),
                    })
                    .collect::<Result<Vec<ExerciseSet>, _>>()?;
                ExerciseHistory::SetBased { sets }
            }
            sets => ExerciseHistory::LegacyFlat { weight, reps, sets },
        };

        Ok(Self {
            name,
            history,
            extra,
        })
    }
}

impl From<ExerciseRecord> for ExerciseRecordWire {
    fn from(record: ExerciseRecord) -> Self {
        let ExerciseRecord {
            name,
            history,
            mut extra,
        } = record;

        match history {
            ExerciseHistory::LegacyFlat { weight, reps, sets } => Self {
                name,
                weight,
                reps,
                sets,
                extra,
            },
            ExerciseHistory::SetBased { sets } => {
                let weight = extra
                    .remove("weight")
                    .and_then(|value| serde_json::from_value(value).ok());
                let reps = extra
                    .remove("reps")
                    .and_then(|value| serde_json::from_value(value).ok());
                let sets = serde_json::to_value(sets).ok();
                Self {
                    name,
                    weight,
                    reps,
                    sets,
                    extra,
                }
            }
        }
    }
}

/// A dated collection of exercises. `exercises` is optional on the wire so a
/// missing list can be reported as a bad argument rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<ExerciseRecord>>,
}

#[cfg(test)]
impl WorkoutRecord {
    pub fn new(exercises: Vec<ExerciseRecord>) -> Self {
        Self {
            date: None,
            exercises: Some(exercises),
        }
    }
}

/// Loosely typed user attributes; every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<Measure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Coach,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub from: Sender,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(default)]
    pub food: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
