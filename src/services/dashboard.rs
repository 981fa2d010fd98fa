use chrono::NaiveDate;
use rand::Rng;

use crate::error::CoachResult;
use crate::models::common::{MealEntry, UserProfile, WorkoutRecord};
use crate::models::responses::DashboardResponse;
use crate::services::nutrition::summarize_day;
use crate::services::output_formatter::{format_recommendation_line, format_workout_lines};
use crate::services::progressive_overload::recommend;
use crate::services::workout_split::next_split_with;

pub const NO_WORKOUTS_NOTICE: &str = "No workouts logged yet.";
pub const NO_RECOMMENDATIONS_NOTICE: &str = "Log a workout to get recommendations.";

pub struct DashboardInput<'a> {
    pub profile: Option<&'a UserProfile>,
    pub last_workout: Option<&'a WorkoutRecord>,
    pub meals: &'a [MealEntry],
    pub today: NaiveDate,
    pub default_calorie_target: u32,
}

pub fn build_dashboard<R: Rng>(input: DashboardInput<'_>, rng: &mut R) -> CoachResult<DashboardResponse> {
    let day = summarize_day(
        input.meals,
        input.profile,
        input.today,
        input.default_calorie_target,
    );

    let (last_workout, recommendations) = match input.last_workout {
        Some(workout) => {
            let recommendations: Vec<String> = recommend(workout, input.profile)?
                .iter()
                .map(format_recommendation_line)
                .collect();
            (format_workout_lines(workout), recommendations)
        }
        None => (
            vec![NO_WORKOUTS_NOTICE.to_string()],
            vec![NO_RECOMMENDATIONS_NOTICE.to_string()],
        ),
    };

    Ok(DashboardResponse {
        current_weight: input.profile.and_then(|profile| profile.weight.clone()),
        goal_weight: input.profile.and_then(|profile| profile.goal_weight.clone()),
        calories_today: day.calories,
        calorie_target: day.target,
        meals_today: day.meal_count,
        last_workout,
        recommendations,
        suggested_split: next_split_with(rng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoachError;
    use crate::models::common::{ExerciseRecord, ExerciseSet, Measure};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn test_empty_dashboard() {
        let input = DashboardInput {
            profile: None,
            last_workout: None,
            meals: &[],
            today: today(),
            default_calorie_target: 2000,
        };

        let dashboard = build_dashboard(input, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(dashboard.last_workout, vec![NO_WORKOUTS_NOTICE]);
        assert_eq!(dashboard.recommendations, vec![NO_RECOMMENDATIONS_NOTICE]);
        assert_eq!(dashboard.calories_today, 0.0);
        assert_eq!(dashboard.calorie_target, 2000.0);
        assert_eq!(dashboard.meals_today, 0);
        assert!((4..=6).contains(&dashboard.suggested_split.exercises.len()));
    }

    #[test]
    fn test_dashboard_with_history() {
        let profile = UserProfile {
            weight: Some(Measure::from("82")),
            goal_weight: Some(Measure::from("78")),
            calorie_target: Some(Measure::from(2400.0)),
            ..UserProfile::default()
        };
        let mut workout = WorkoutRecord::new(vec![ExerciseRecord::with_sets(
            "Barbell Squat",
            vec![ExerciseSet::new(100.0, 5.0)],
        )]);
        workout.date = Some("2025-03-31".to_string());
        let meals = vec![MealEntry {
            food: "Eggs".to_string(),
            calories: Some(Measure::from("300")),
            date: Some("2025-04-01".to_string()),
        }];

        let input = DashboardInput {
            profile: Some(&profile),
            last_workout: Some(&workout),
            meals: &meals,
            today: today(),
            default_calorie_target: 2000,
        };
        let dashboard = build_dashboard(input, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(dashboard.current_weight, Some(Measure::from("82")));
        assert_eq!(dashboard.goal_weight, Some(Measure::from("78")));
        assert_eq!(dashboard.calories_today, 300.0);
        assert_eq!(dashboard.calorie_target, 2400.0);
        assert_eq!(dashboard.meals_today, 1);
        assert_eq!(
            dashboard.last_workout,
            vec!["Date: 2025-03-31", "Barbell Squat: 100kg x 5 x 1"]
        );
        assert_eq!(dashboard.recommendations, vec!["Barbell Squat: 102.5kg x 5 x 1"]);
    }

    #[test]
    fn test_workout_without_exercises_is_rejected() {
        let workout = WorkoutRecord::default();
        let input = DashboardInput {
            profile: None,
            last_workout: Some(&workout),
            meals: &[],
            today: today(),
            default_calorie_target: 2000,
        };

        assert!(matches!(
            build_dashboard(input, &mut ChaCha8Rng::seed_from_u64(1)),
            Err(CoachError::InvalidArgument(_))
        ));
    }
}
