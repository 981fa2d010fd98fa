use chrono::NaiveDate;

use crate::error::{CoachError, CoachResult};
use crate::models::common::{ExerciseHistory, ExerciseRecord, Measure, WorkoutRecord};
use crate::services::nutrition::format_day;

/// An exercise typed into the log form must carry a name, weight, reps and set count.
pub fn validate_exercise_entry(entry: &ExerciseRecord) -> CoachResult<()> {
    let filled = |field: &Option<Measure>| field.as_ref().is_some_and(Measure::is_filled);

    let complete = match &entry.history {
        ExerciseHistory::LegacyFlat { weight, reps, sets } => {
            !entry.name.is_empty() && filled(weight) && filled(reps) && sets_filled(sets.as_ref())
        }
        ExerciseHistory::SetBased { sets } => {
            !entry.name.is_empty()
                && sets
                    .iter()
                    .all(|set| filled(&set.weight) && filled(&set.reps))
        }
    };

    if complete {
        Ok(())
    } else {
        Err(CoachError::InvalidField("Fill all fields".to_string()))
    }
}

fn sets_filled(sets: Option<&serde_json::Value>) -> bool {
    match sets {
        Some(value) => serde_json::from_value::<Measure>(value.clone()).is_ok_and(|sets| sets.is_filled()),
        None => false,
    }
}

/// Assembles a dated workout from validated form entries.
pub fn build_workout(entries: Vec<ExerciseRecord>, date: NaiveDate) -> CoachResult<WorkoutRecord> {
    if entries.is_empty() {
        return Err(CoachError::InvalidArgument("Add at least one exercise".to_string()));
    }

    for entry in &entries {
        validate_exercise_entry(entry)?;
    }

    tracing::info!(exercise_count = entries.len(), date = %date, "workout.logged");

    Ok(WorkoutRecord {
        date: Some(format_day(date)),
        exercises: Some(entries),
    })
}
