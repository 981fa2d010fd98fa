use crate::models::common::WorkoutRecord;
use crate::services::output_formatter::format_workout_lines;

/// Display lines for each workout, newest first. Undated workouts sort last.
///
/// Dates are `YYYY-MM-DD`, so text order is calendar order; ties keep their input order.
pub fn build_history(workouts: &[WorkoutRecord]) -> Vec<Vec<String>> {
    let mut ordered: Vec<&WorkoutRecord> = workouts.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    ordered.into_iter().map(format_workout_lines).collect()
}
