pub mod classifier;
pub mod coach_chat;
pub mod dashboard;
pub mod history;
pub mod nutrition;
pub mod output_formatter;
pub mod progressive_overload;
pub mod workout_log;
pub mod workout_split;
