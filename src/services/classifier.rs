use regex::Regex;
use std::sync::LazyLock;

static BARBELL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)barbell").unwrap());
static DUMBBELL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)dumbbell").unwrap());

/// Increment class of an exercise, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseClass {
    Barbell,
    Dumbbell,
    Other,
}

impl ExerciseClass {
    /// Starting weight in kg for an exercise with no usable history.
    pub fn default_weight(self) -> f64 {
        match self {
            ExerciseClass::Barbell => 20.0,
            ExerciseClass::Dumbbell => 5.0,
            ExerciseClass::Other => 10.0,
        }
    }
}

/// Barbell wins over dumbbell when a name mentions both.
pub fn classify(name: &str) -> ExerciseClass {
    if BARBELL_REGEX.is_match(name) {
        ExerciseClass::Barbell
    } else if DUMBBELL_REGEX.is_match(name) {
        ExerciseClass::Dumbbell
    } else {
        ExerciseClass::Other
    }
}
