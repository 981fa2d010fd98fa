use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{CoachError, CoachResult};
use crate::models::common::{ExerciseHistory, ExerciseRecord, Measure, UserProfile, WorkoutRecord};
use crate::services::classifier::{ExerciseClass, classify};

pub const START_LIGHT_SUGGESTION: &str = "Start light and focus on form";

pub const RECOMMENDATION_INFO: &str = "
The AI recommendation uses a research-based progressive overload algorithm:
- If you completed all sets with good form, it suggests increasing the weight by 2.5-5% (rounded to the nearest 2.5kg for barbell, 1kg for dumbbell, or 1 rep if weight is not increased).
- If you did not complete all sets, it suggests repeating the same weight next session.
- For new exercises, it suggests a conservative starting weight (e.g., 50% of bodyweight for compound lifts, 5-10kg for isolation moves).

The workout split (Push, Pull, Legs) is randomized each refresh, with 4-6 exercises per day, based on common evidence-based routines.

References:
- Schoenfeld, B.J. (2010). The mechanisms of muscle hypertrophy and their application to resistance training. J Strength Cond Res.
- https://www.strongerbyscience.com/progressive-overload/
- https://www.ncbi.nlm.nih.gov/pmc/articles/PMC5485202/
";

/// The previous record with the weight to attempt next session.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedExercise {
    pub record: ExerciseRecord,
    pub weight: f64,
    /// Only set when there was no usable prior weight.
    pub suggestion: Option<&'static str>,
}

impl Serialize for RecommendedExercise {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = match serde_json::to_value(&self.record).map_err(serde::ser::Error::custom)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        fields.insert("weight".to_string(), Value::from(self.weight));
        if let Some(suggestion) = self.suggestion {
            fields.insert("suggestion".to_string(), Value::from(suggestion));
        }

        fields.serialize(serializer)
    }
}

/// Builds next-session targets for every exercise of `workout`, in input order.
///
/// The profile is accepted for callers that have one but does not influence the result.
pub fn recommend(
    workout: &WorkoutRecord,
    _profile: Option<&UserProfile>,
) -> CoachResult<Vec<RecommendedExercise>> {
    let exercises = workout
        .exercises
        .as_ref()
        .ok_or_else(|| CoachError::InvalidArgument("workout has no exercises list".to_string()))?;

    Ok(exercises.iter().map(recommend_exercise).collect())
}

pub fn recommend_exercise(record: &ExerciseRecord) -> RecommendedExercise {
    let class = classify(&record.name);
    let last_weight = last_set_weight(&record.history);

    let recommended = if last_weight == 0.0 {
        RecommendedExercise {
            record: record.clone(),
            weight: class.default_weight(),
            suggestion: Some(START_LIGHT_SUGGESTION),
        }
    } else {
        RecommendedExercise {
            record: record.clone(),
            weight: next_weight(last_weight, class),
            suggestion: None,
        }
    };

    debug!(
        exercise = %record.name,
        ?class,
        last_weight,
        next_weight = recommended.weight,
        "recommendation.exercise"
    );

    recommended
}

/// The last strictly positive set weight, or the flat weight; 0 when neither is usable.
pub fn last_set_weight(history: &ExerciseHistory) -> f64 {
    match history {
        ExerciseHistory::SetBased { sets } => sets
            .iter()
            .rev()
            .filter_map(|set| set.weight.as_ref().and_then(Measure::as_number))
            .find(|weight| *weight > 0.0)
            .unwrap_or(0.0),
        ExerciseHistory::LegacyFlat { weight, .. } => weight
            .as_ref()
            .and_then(Measure::as_number)
            .unwrap_or(0.0),
    }
}

pub fn weight_increment(weight: f64, class: ExerciseClass) -> f64 {
    let mut increment = match class {
        ExerciseClass::Barbell => f64::max(2.5, round_half_up(weight * 0.025 / 2.5) * 2.5),
        ExerciseClass::Dumbbell | ExerciseClass::Other => {
            f64::max(1.0, round_half_up(weight * 0.025))
        }
    };

    // Never more than a 5% jump.
    increment = increment.min(round_half_up(weight * 0.05));

    if weight < 10.0 {
        increment = 1.0;
    }
    // Applied after the < 10 override, so light barbells still move by a plate pair.
    if weight < 20.0 && class == ExerciseClass::Barbell {
        increment = 2.5;
    }

    increment
}

/// Next-session weight, snapped to 0.5 kg.
pub fn next_weight(weight: f64, class: ExerciseClass) -> f64 {
    round_half_up((weight + weight_increment(weight, class)) * 2.0) / 2.0
}

/// Rounds halves toward positive infinity (`-2.5` becomes `-2`).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
