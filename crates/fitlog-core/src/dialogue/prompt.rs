//! User-facing prompt text, button labels, and menu layouts.
//!
//! Labels are defined once here; the transport-adaptation layer maps
//! incoming button text back to tagged commands using these same
//! constants, so label changes stay in one place.

use crate::catalog::{builtin_plan, Catalog, Category};
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

/// Button labels shown by the transport shell.
pub mod labels {
    pub const UPPER_BODY: &str = "💪 Upper body";
    pub const LOWER_BODY: &str = "🦵 Lower body";
    pub const CORE: &str = "🔥 Core";
    pub const FLEXIBILITY: &str = "🤸 Flexibility";
    pub const PROGRESS: &str = "📈 My progress";
    pub const ADD_RESULT: &str = "➕ Add result";
    pub const TRACK_WATER: &str = "💧 Add water";
    pub const WATER_PROGRESS: &str = "💧 My water chart";
    pub const MOTIVATION: &str = "💖 Motivation";
    pub const FINISH_WORKOUT: &str = "🏁 Finish workout";
    pub const ADD_EXERCISE: &str = "🏋️ Add exercise";
    pub const ADD_TEMPLATE: &str = "✨ Add workout";
    pub const MAIN_MENU: &str = "Main menu";
    pub const CANCEL: &str = "Cancel";
    pub const FREE_TEXT_EXERCISE: &str = "✏️ Enter my own exercise";
}

/// Label for a category button.
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::UpperBody => labels::UPPER_BODY,
        Category::LowerBody => labels::LOWER_BODY,
        Category::Core => labels::CORE,
        Category::Flexibility => labels::FLEXIBILITY,
    }
}

/// The ordered main-menu option list, emitted with every return to idle.
pub fn main_menu() -> Vec<String> {
    let mut options: Vec<String> = Category::iter()
        .map(|c| category_label(c).to_string())
        .collect();
    options.extend(
        [
            labels::PROGRESS,
            labels::ADD_RESULT,
            labels::TRACK_WATER,
            labels::WATER_PROGRESS,
            labels::MOTIVATION,
            labels::FINISH_WORKOUT,
            labels::ADD_TEMPLATE,
            labels::ADD_EXERCISE,
        ]
        .map(str::to_string),
    );
    options
}

/// Exercise-choice options: every catalog exercise, then the free-text
/// and cancel sentinels.
pub fn exercise_menu(catalog: &Catalog) -> Vec<String> {
    let mut options = catalog.all_exercise_names();
    options.push(labels::FREE_TEXT_EXERCISE.to_string());
    options.push(labels::CANCEL.to_string());
    options
}

/// Category-choice options for the add-exercise flow.
pub fn category_menu() -> Vec<String> {
    let mut options: Vec<String> = Category::iter()
        .map(|c| category_label(c).to_string())
        .collect();
    options.push(labels::MAIN_MENU.to_string());
    options
}

/// The single cancel option shown inside multi-step flows.
pub fn cancel_menu() -> Vec<String> {
    vec![labels::CANCEL.to_string()]
}

pub const WELCOME: &str = "🏋️ Welcome to Fitlog!\nPick an action:";

pub const HELP: &str = "🏋️ Fitlog keeps track of your workouts and water.\n\n\
    Commands:\n\
    /start - back to the main menu\n\
    /help - show this help\n\
    /cancel - cancel the current action\n\n\
    Use the menu buttons to navigate.";

pub const CANCELLED: &str = "Action cancelled. Back to the main menu.";

pub const UNKNOWN_SELECTION: &str = "I did not understand that. Please use the menu buttons.";

pub const STORAGE_FAILURE: &str =
    "Something went wrong while saving. Nothing was recorded - please try again.";

pub const RECOVERY_CHECKLIST: &str = "🏆 Workout finished, well done!\n\n\
    Remember to recover:\n\
    💧 Drink plenty of water\n\
    🍎 Eat something nourishing\n\
    🛌 Sleep at least 7-8 hours\n\
    💆 Stretch or get a massage";

pub const NO_WORKOUT_DATA: &str =
    "Not enough data for progress charts yet. Log the same exercise at least twice.";

pub const NO_HYDRATION_DATA: &str = "No water intake recorded yet.";

const MOTIVATION_QUOTES: &[&str] = &[
    "You are stronger than you think! 💪",
    "Every rep is an investment in your health! 💎",
    "Today's discomfort is tomorrow's pride! 🌟",
    "Strength is not just muscle, it is character! ✨",
    "You are not exercising, you are building confidence! 👑",
    "Don't compare yourself to others - you are one of a kind! 🌺",
    "A strong body is a side effect of a strong will! 💖",
];

/// Picks a random motivational quote.
pub fn motivation_quote() -> &'static str {
    MOTIVATION_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MOTIVATION_QUOTES[0])
}

/// Renders the text shown when a category is selected from the main
/// menu: the built-in plan when one exists, then any user additions.
pub fn plan_text(catalog: &Catalog, category: Category) -> String {
    let mut text = String::new();

    if let Some(plan) = builtin_plan(category) {
        text.push_str(&format!("{}:\n\n", plan.description));
        for (i, exercise) in plan.exercises.iter().enumerate() {
            text.push_str(&format!(
                "{}. {} - {}x{}\n",
                i + 1,
                exercise.name,
                exercise.sets,
                exercise.reps
            ));
        }
        let extra: Vec<&String> = catalog
            .exercises_in(category)
            .iter()
            .filter(|name| !plan.exercises.iter().any(|e| e.name == name.as_str()))
            .collect();
        if !extra.is_empty() {
            text.push_str("\nAlso in this category:\n");
            for name in extra {
                text.push_str(&format!("- {name}\n"));
            }
        }
    } else {
        text.push_str(&format!("Exercises for {category}:\n\n"));
        for name in catalog.exercises_in(category) {
            text.push_str(&format!("- {name}\n"));
        }
    }

    text.push_str("\nPress '🏁 Finish workout' when you are done.");
    text
}
