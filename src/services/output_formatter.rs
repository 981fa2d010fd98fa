use crate::models::common::{ExerciseHistory, ExerciseRecord, Measure, WorkoutRecord, format_kg};
use crate::services::progressive_overload::RecommendedExercise;

/// `Name: 60kg x 8 x 3`, the line shown for a logged exercise.
pub fn format_exercise_line(record: &ExerciseRecord) -> String {
    let (weight, reps, sets) = match &record.history {
        ExerciseHistory::LegacyFlat { weight, reps, sets } => (
            format_measure(weight.as_ref()),
            format_measure(reps.as_ref()),
            sets.as_ref().map(format_raw).unwrap_or_default(),
        ),
        ExerciseHistory::SetBased { sets } => {
            let last = sets.last();
            (
                format_measure(last.and_then(|set| set.weight.as_ref())),
                format_measure(last.and_then(|set| set.reps.as_ref())),
                sets.len().to_string(),
            )
        }
    };

    format!("{}: {}kg x {} x {}", record.name, weight, reps, sets)
}

pub fn format_recommendation_line(recommendation: &RecommendedExercise) -> String {
    let (reps, sets) = match &recommendation.record.history {
        ExerciseHistory::LegacyFlat { reps, sets, .. } => (
            format_measure(reps.as_ref()),
            sets.as_ref().map(format_raw).unwrap_or_default(),
        ),
        ExerciseHistory::SetBased { sets } => (
            format_measure(sets.last().and_then(|set| set.reps.as_ref())),
            sets.len().to_string(),
        ),
    };

    let mut line = format!(
        "{}: {}kg x {} x {}",
        recommendation.record.name,
        format_kg(recommendation.weight),
        reps,
        sets
    );

    if let Some(suggestion) = recommendation.suggestion {
        line.push_str(&format!(" ({})", suggestion));
    }

    line
}

/// `Date: ...` followed by one line per exercise.
pub fn format_workout_lines(workout: &WorkoutRecord) -> Vec<String> {
    let mut lines = vec![format!("Date: {}", workout.date.as_deref().unwrap_or_default())];
    lines.extend(
        workout
            .exercises
            .iter()
            .flatten()
            .map(format_exercise_line),
    );
    lines
}

fn format_measure(value: Option<&Measure>) -> String {
    value.map(|measure| measure.to_string()).unwrap_or_default()
}

fn format_raw(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Number(number) => number
            .as_f64()
            .map(format_kg)
            .unwrap_or_else(|| number.to_string()),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(items) if items.is_empty() => String::new(),
        serde_json::Value::Array(items) => items.len().to_string(),
        other => other.to_string(),
    }
}
