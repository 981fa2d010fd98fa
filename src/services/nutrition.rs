use chrono::NaiveDate;

use crate::error::{CoachError, CoachResult};
use crate::models::common::{MealEntry, Measure, UserProfile};

pub const DEFAULT_CALORIE_TARGET: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub calories: f64,
    pub target: f64,
    pub meal_count: usize,
}

/// Totals the meals logged on `date` against the profile's calorie target.
pub fn summarize_day(
    meals: &[MealEntry],
    profile: Option<&UserProfile>,
    date: NaiveDate,
    default_target: u32,
) -> DaySummary {
    let day = format_day(date);
    let todays_meals: Vec<_> = meals
        .iter()
        .filter(|meal| meal.date.as_deref() == Some(day.as_str()))
        .collect();

    let calories = todays_meals
        .iter()
        .map(|meal| meal_calories(meal))
        .sum();

    DaySummary {
        calories,
        target: calorie_target(profile, default_target),
        meal_count: todays_meals.len(),
    }
}

/// Unreadable calorie values count as zero rather than poisoning the total.
pub fn meal_calories(meal: &MealEntry) -> f64 {
    meal.calories
        .as_ref()
        .filter(|calories| calories.is_filled())
        .and_then(Measure::as_number)
        .unwrap_or(0.0)
}

pub fn calorie_target(profile: Option<&UserProfile>, default_target: u32) -> f64 {
    profile
        .and_then(|profile| profile.calorie_target.as_ref())
        .filter(|target| target.is_filled())
        .and_then(Measure::as_number)
        .filter(|target| *target != 0.0)
        .unwrap_or(f64::from(default_target))
}

/// Checks a food log entry and stamps it with `date`.
pub fn log_meal(meal: MealEntry, date: NaiveDate) -> CoachResult<MealEntry> {
    let calories_filled = meal.calories.as_ref().is_some_and(Measure::is_filled);
    if meal.food.is_empty() || !calories_filled {
        return Err(CoachError::InvalidField("Fill all fields".to_string()));
    }

    Ok(MealEntry {
        date: Some(format_day(date)),
        ..meal
    })
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
