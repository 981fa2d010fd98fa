use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

#[derive(Debug)]
pub struct SplitTemplate {
    pub name: &'static str,
    pub exercises: [&'static str; 6],
}

pub const PUSH_DAY: SplitTemplate = SplitTemplate {
    name: "Push Day",
    exercises: [
        "Barbell Bench Press",
        "Dumbbell Incline Press",
        "Overhead Press",
        "Tricep Extension",
        "Lateral Raise",
        "Chest Fly",
    ],
};

pub const PULL_DAY: SplitTemplate = SplitTemplate {
    name: "Pull Day",
    exercises: [
        "Pull Up",
        "Lat Pulldown",
        "Seated Row",
        "Barbell Curl",
        "Face Pull",
        "Hammer Curl",
    ],
};

pub const LEG_DAY: SplitTemplate = SplitTemplate {
    name: "Leg Day",
    exercises: [
        "Barbell Squat",
        "Leg Press",
        "Leg Curl",
        "Leg Extension",
        "Calf Raise",
        "Romanian Deadlift",
    ],
};

pub static SPLIT_TEMPLATES: [&SplitTemplate; 3] = [&PUSH_DAY, &PULL_DAY, &LEG_DAY];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutSplit {
    pub name: &'static str,
    pub exercises: Vec<&'static str>,
}

/// A random split from the thread-local generator.
pub fn next_split() -> WorkoutSplit {
    next_split_with(&mut rand::thread_rng())
}

/// Picks a template, shuffles it and keeps the first 4 to 6 exercises.
pub fn next_split_with<R: Rng>(rng: &mut R) -> WorkoutSplit {
    let template = SPLIT_TEMPLATES[rng.gen_range(0..SPLIT_TEMPLATES.len())];

    let mut exercises = template.exercises.to_vec();
    exercises.shuffle(rng);
    exercises.truncate(rng.gen_range(4..=6));

    tracing::debug!(split = template.name, exercise_count = exercises.len(), "split.generated");

    WorkoutSplit {
        name: template.name,
        exercises,
    }
}
