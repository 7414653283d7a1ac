//! Transport-adaptation layer: maps raw message text to tagged input.
//!
//! This is the only place where display strings are compared. The labels
//! come from `fitlog_core::dialogue::prompt`, so menu rendering and menu
//! recognition can never drift apart.

use fitlog_core::catalog::Category;
use fitlog_core::dialogue::prompt::labels;
use fitlog_core::dialogue::{ChatCommand, MenuCommand, UserInput};

/// Parses one raw transport message into tagged input.
///
/// Leading/trailing whitespace is trimmed. Text that matches no command
/// or button label passes through as free text for the active state's
/// grammar to judge.
pub fn parse_message(text: &str, is_command: bool) -> UserInput {
    let text = text.trim();

    if is_command {
        return match text.trim_start_matches('/') {
            "start" => UserInput::Command(ChatCommand::Start),
            "help" => UserInput::Command(ChatCommand::Help),
            "cancel" => UserInput::Command(ChatCommand::Cancel),
            // Unknown commands fall through to the state machine as
            // plain text and get rejected there.
            _ => UserInput::Text(text.to_string()),
        };
    }

    match text {
        labels::UPPER_BODY => UserInput::Menu(MenuCommand::Category(Category::UpperBody)),
        labels::LOWER_BODY => UserInput::Menu(MenuCommand::Category(Category::LowerBody)),
        labels::CORE => UserInput::Menu(MenuCommand::Category(Category::Core)),
        labels::FLEXIBILITY => UserInput::Menu(MenuCommand::Category(Category::Flexibility)),
        labels::PROGRESS => UserInput::Menu(MenuCommand::Progress),
        labels::ADD_RESULT => UserInput::Menu(MenuCommand::AddResult),
        labels::TRACK_WATER => UserInput::Menu(MenuCommand::TrackWater),
        labels::WATER_PROGRESS => UserInput::Menu(MenuCommand::WaterProgress),
        labels::MOTIVATION => UserInput::Menu(MenuCommand::Motivation),
        labels::FINISH_WORKOUT => UserInput::Menu(MenuCommand::FinishWorkout),
        labels::ADD_EXERCISE => UserInput::Menu(MenuCommand::AddExercise),
        labels::ADD_TEMPLATE => UserInput::Menu(MenuCommand::AddTemplate),
        labels::MAIN_MENU => UserInput::Menu(MenuCommand::MainMenu),
        labels::CANCEL => UserInput::Menu(MenuCommand::Cancel),
        labels::FREE_TEXT_EXERCISE => UserInput::Menu(MenuCommand::FreeTextExercise),
        _ => UserInput::Text(text.to_string()),
    }
}
