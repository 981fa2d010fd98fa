use rand::Rng;

use crate::models::common::{ChatTurn, Sender};
use crate::services::workout_split::{WorkoutSplit, next_split_with};

pub const GREETING: &str = "Hi! Ask me about your workout or nutrition.";
pub const FALLBACK_REPLY: &str = "I'm here to help! Ask about your workout, nutrition, or how to progress.";

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Fixed(&'static str),
    SuggestSplit,
}

#[derive(Debug)]
pub struct ChatRule {
    pub triggers: &'static [&'static str],
    pub reply: Reply,
}

/// Checked top to bottom against the lower-cased message; the first rule with a matching trigger answers.
pub static CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        triggers: &["bench press"],
        reply: Reply::Fixed(
            "Try increasing your bench press by 2.5% if you completed all sets last time! For barbell lifts, a 2.5kg increase is typical.",
        ),
    },
    ChatRule {
        triggers: &["squat"],
        reply: Reply::Fixed(
            "For squats, aim to increase the weight by 2.5-5% if you completed all sets with good form. If not, repeat the same weight next session.",
        ),
    },
    ChatRule {
        triggers: &["deadlift"],
        reply: Reply::Fixed(
            "Deadlifts respond well to small increases. Try adding 2.5-5% if you completed all sets, or repeat the weight if you struggled.",
        ),
    },
    ChatRule {
        triggers: &["progressive overload"],
        reply: Reply::Fixed(
            "Progressive overload means gradually increasing the weight, reps, or sets over time. If you complete all sets, increase the weight by 2.5-5% next session.",
        ),
    },
    ChatRule {
        triggers: &["push day"],
        reply: Reply::Fixed(
            "A push day typically includes: Barbell Bench Press, Overhead Press, Dumbbell Incline Press, Tricep Extension, Lateral Raise. Aim for 3-4 sets of 8-12 reps each.",
        ),
    },
    ChatRule {
        triggers: &["pull day"],
        reply: Reply::Fixed(
            "A pull day could include: Pull Up, Lat Pulldown, Seated Row, Barbell Curl, Face Pull, Hammer Curl. Try 3-4 sets of 8-12 reps.",
        ),
    },
    ChatRule {
        triggers: &["leg day"],
        reply: Reply::Fixed(
            "A leg day might include: Barbell Squat, Leg Press, Leg Curl, Leg Extension, Calf Raise, Romanian Deadlift. 3-4 sets of 8-12 reps is a good start.",
        ),
    },
    ChatRule {
        triggers: &["calories"],
        reply: Reply::Fixed(
            "Check your dashboard for today's calorie total. Stay within your target for best results!",
        ),
    },
    ChatRule {
        triggers: &["weight should i lift", "how much weight", "how do i progress"],
        reply: Reply::Fixed(
            "Increase the weight by 2.5-5% if you completed all sets and reps last session. If not, repeat the same weight. Always focus on good form!",
        ),
    },
    ChatRule {
        triggers: &["suggest a workout", "workout split", "what should i train"],
        reply: Reply::SuggestSplit,
    },
    // Plain substrings, so "hi" also fires inside words like "this".
    ChatRule {
        triggers: &["hello", "hi", "hey"],
        reply: Reply::Fixed("Hello! How can I help you with your training or nutrition today?"),
    },
    ChatRule {
        triggers: &["thank"],
        reply: Reply::Fixed("You're welcome! Let me know if you have more questions."),
    },
];

pub fn respond(text: &str) -> String {
    respond_with(text, &mut rand::thread_rng())
}

pub fn respond_with<R: Rng>(text: &str, rng: &mut R) -> String {
    let input = text.to_lowercase();

    let rule = CHAT_RULES.iter().find(|rule| {
        rule.triggers
            .iter()
            .any(|trigger| input.contains(trigger))
    });

    match rule.map(|rule| rule.reply) {
        Some(Reply::Fixed(reply)) => reply.to_string(),
        Some(Reply::SuggestSplit) => format_split_suggestion(&next_split_with(rng)),
        None => FALLBACK_REPLY.to_string(),
    }
}

/// One user message and the coach's answer, in display order.
pub fn exchange(text: &str) -> [ChatTurn; 2] {
    let reply = respond(text);

    [
        ChatTurn {
            from: Sender::User,
            text: text.to_string(),
        },
        ChatTurn {
            from: Sender::Coach,
            text: reply,
        },
    ]
}

fn format_split_suggestion(split: &WorkoutSplit) -> String {
    format!("Try a {}:\n- {}", split.name, split.exercises.join("\n- "))
}
