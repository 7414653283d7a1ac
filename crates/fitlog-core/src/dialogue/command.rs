//! User input types for the dialogue engine.
//!
//! The engine dispatches only on these tagged values. Matching raw
//! message text (button labels, slash commands) against them is the job
//! of the transport-adaptation layer; the engine never compares display
//! strings.

/// Transport-level commands, recognized in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// Reset to the main menu
    Start,
    /// Static usage help, no state change
    Help,
    /// Discard the current flow unconditionally
    Cancel,
}

/// Tagged menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// A category button; shows the category's plan from `Idle`, or picks
    /// the category inside the add-exercise flow
    Category(crate::catalog::Category),
    /// Show workout progress charts
    Progress,
    /// Start the log-a-result flow
    AddResult,
    /// Start the track-water flow
    TrackWater,
    /// Show the hydration chart
    WaterProgress,
    /// Finish the workout (static recovery checklist)
    FinishWorkout,
    /// Send a motivational quote
    Motivation,
    /// Start the add-exercise flow
    AddExercise,
    /// Start the save-template flow
    AddTemplate,
    /// Back to the main menu (cancels any flow in progress)
    MainMenu,
    /// Cancel button (same contract as the cancel command)
    Cancel,
    /// Enter a free-text exercise name instead of picking from the menu
    FreeTextExercise,
}

/// One unit of user input to the dialogue engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// A transport command (`/start`, `/help`, `/cancel`)
    Command(ChatCommand),
    /// A recognized menu selection
    Menu(MenuCommand),
    /// Free text that matched no menu label
    Text(String),
}
