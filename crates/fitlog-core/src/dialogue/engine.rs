//! The dialogue engine: validates each tagged input against the active
//! state's grammar and either advances the session, retries in place, or
//! aborts back to idle.
//!
//! All validation and catalog errors are handled here and turned into
//! re-prompts; they never escalate. Storage failures abort the current
//! flow to `Idle` with a failure notice and no partial commit - the
//! engine never retries a write silently.

use super::command::{ChatCommand, MenuCommand, UserInput};
use super::prompt;
use super::state::{DialogueState, UserSession};
use crate::catalog::{AddExerciseOutcome, AddTemplateOutcome, CatalogResolver};
use crate::error::{FitlogError, Result};
use crate::hydration::{HydrationEntry, HydrationLogRepository};
use crate::workout::{WorkoutEntry, WorkoutLogRepository};
use std::sync::Arc;

/// Which chart the application layer should aggregate and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Workout,
    Hydration,
}

/// One outbound effect produced by a transition.
///
/// The engine never talks to the transport or the chart renderer
/// directly; it describes what should happen and the application layer
/// carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Send a text message with the given ordered menu options
    /// (an empty list means "keep the current keyboard").
    Text { text: String, options: Vec<String> },
    /// Aggregate the user's history and send the corresponding chart(s).
    Chart(ChartKind),
}

impl Response {
    fn text(text: impl Into<String>, options: Vec<String>) -> Self {
        Self::Text {
            text: text.into(),
            options,
        }
    }

    fn notice(text: impl Into<String>) -> Self {
        Self::text(text, Vec::new())
    }
}

/// The finite-state engine driving every guided flow.
pub struct DialogueEngine {
    workouts: Arc<dyn WorkoutLogRepository>,
    hydration: Arc<dyn HydrationLogRepository>,
    resolver: CatalogResolver,
}

impl DialogueEngine {
    /// Creates a new engine over the given stores.
    pub fn new(
        workouts: Arc<dyn WorkoutLogRepository>,
        hydration: Arc<dyn HydrationLogRepository>,
        resolver: CatalogResolver,
    ) -> Self {
        Self {
            workouts,
            hydration,
            resolver,
        }
    }

    /// Feeds one unit of input through the session's active state.
    ///
    /// Always leaves the session in a well-defined state. The returned
    /// responses are emitted in order.
    ///
    /// # Errors
    ///
    /// Only internal inconsistencies surface as errors; user-input and
    /// storage problems are converted into responses.
    pub async fn handle(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        tracing::debug!(
            "[DialogueEngine] user={} state={:?} input={:?}",
            session.user_id,
            session.state,
            input
        );

        // Transport commands and the global cancel work in every state.
        match &input {
            UserInput::Command(ChatCommand::Start) => {
                session.reset();
                return Ok(vec![Response::text(prompt::WELCOME, prompt::main_menu())]);
            }
            UserInput::Command(ChatCommand::Help) => {
                return Ok(vec![Response::notice(prompt::HELP)]);
            }
            UserInput::Command(ChatCommand::Cancel)
            | UserInput::Menu(MenuCommand::Cancel)
            | UserInput::Menu(MenuCommand::MainMenu) => {
                return Ok(self.cancel(session));
            }
            _ => {}
        }

        match session.state {
            DialogueState::Idle => self.handle_idle(session, input).await,
            DialogueState::AwaitExerciseChoice => self.handle_exercise_choice(session, input).await,
            DialogueState::AwaitSetCount => Ok(Self::handle_set_count(session, input)),
            DialogueState::AwaitWeight => self.handle_weight(session, input).await,
            DialogueState::AwaitHydrationVolume => self.handle_hydration(session, input).await,
            DialogueState::AwaitNewExerciseCategory => {
                Ok(Self::handle_new_exercise_category(session, input))
            }
            DialogueState::AwaitNewExerciseName => self.handle_new_exercise_name(session, input).await,
            DialogueState::AwaitTemplateName => Ok(Self::handle_template_name(session, input)),
            DialogueState::AwaitTemplateExerciseList => {
                self.handle_template_exercises(session, input).await
            }
        }
    }

    /// Immediate, unconditional cancel. Never fails.
    fn cancel(&self, session: &mut UserSession) -> Vec<Response> {
        session.reset();
        vec![Response::text(prompt::CANCELLED, prompt::main_menu())]
    }

    /// Aborts the current flow after a storage failure: safe landing in
    /// `Idle`, no partial commit, generic failure notice.
    fn abort_on_storage_failure(
        session: &mut UserSession,
        err: &FitlogError,
        context: &str,
    ) -> Vec<Response> {
        tracing::warn!(
            "[DialogueEngine] storage failure during {} for user {}: {}",
            context,
            session.user_id,
            err
        );
        session.reset();
        vec![Response::text(prompt::STORAGE_FAILURE, prompt::main_menu())]
    }

    async fn handle_idle(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        let UserInput::Menu(command) = input else {
            return Ok(vec![Response::text(
                prompt::UNKNOWN_SELECTION,
                prompt::main_menu(),
            )]);
        };

        match command {
            MenuCommand::Category(category) => match self.resolver.resolve(&session.user_id).await {
                Ok(catalog) => Ok(vec![Response::text(
                    prompt::plan_text(&catalog, category),
                    prompt::main_menu(),
                )]),
                Err(e) => Ok(Self::abort_on_storage_failure(session, &e, "catalog read")),
            },
            MenuCommand::Progress => Ok(vec![Response::Chart(ChartKind::Workout)]),
            MenuCommand::WaterProgress => Ok(vec![Response::Chart(ChartKind::Hydration)]),
            MenuCommand::AddResult => match self.resolver.resolve(&session.user_id).await {
                Ok(catalog) => {
                    session.state = DialogueState::AwaitExerciseChoice;
                    Ok(vec![Response::text(
                        "Pick an exercise:",
                        prompt::exercise_menu(&catalog),
                    )])
                }
                Err(e) => Ok(Self::abort_on_storage_failure(session, &e, "catalog read")),
            },
            MenuCommand::TrackWater => {
                session.state = DialogueState::AwaitHydrationVolume;
                Ok(vec![Response::text(
                    "How many ml of water did you drink?",
                    prompt::cancel_menu(),
                )])
            }
            MenuCommand::FinishWorkout => Ok(vec![Response::text(
                prompt::RECOVERY_CHECKLIST,
                prompt::main_menu(),
            )]),
            MenuCommand::Motivation => Ok(vec![Response::text(
                prompt::motivation_quote(),
                prompt::main_menu(),
            )]),
            MenuCommand::AddExercise => {
                session.state = DialogueState::AwaitNewExerciseCategory;
                Ok(vec![Response::text(
                    "Which group does your new exercise belong to?",
                    prompt::category_menu(),
                )])
            }
            MenuCommand::AddTemplate => {
                session.state = DialogueState::AwaitTemplateName;
                Ok(vec![Response::text(
                    "What do you want to call your workout?",
                    prompt::cancel_menu(),
                )])
            }
            // Cancel/MainMenu are handled globally; a stray free-text
            // sentinel at the main menu means nothing.
            MenuCommand::Cancel | MenuCommand::MainMenu | MenuCommand::FreeTextExercise => {
                Ok(vec![Response::text(
                    prompt::UNKNOWN_SELECTION,
                    prompt::main_menu(),
                )])
            }
        }
    }

    async fn handle_exercise_choice(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        match input {
            UserInput::Menu(MenuCommand::FreeTextExercise) => {
                session.pending.free_text = true;
                Ok(vec![Response::text(
                    "Type the exercise name:",
                    prompt::cancel_menu(),
                )])
            }
            UserInput::Text(text) if session.pending.free_text => {
                if text.is_empty() {
                    return Ok(vec![Response::text(
                        "The exercise name cannot be empty.",
                        prompt::cancel_menu(),
                    )]);
                }
                session.pending.exercise = Some(text.clone());
                session.pending.free_text = false;
                session.state = DialogueState::AwaitSetCount;
                Ok(vec![Response::text(
                    format!("How many sets for {text}?"),
                    prompt::cancel_menu(),
                )])
            }
            UserInput::Text(text) => {
                let catalog = match self.resolver.resolve(&session.user_id).await {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        return Ok(Self::abort_on_storage_failure(session, &e, "catalog read"))
                    }
                };
                if catalog.is_valid_exercise(&text) {
                    session.pending.category = catalog.category_of(&text);
                    session.pending.exercise = Some(text.clone());
                    session.state = DialogueState::AwaitSetCount;
                    Ok(vec![Response::text(
                        format!("How many sets for {text}?"),
                        prompt::cancel_menu(),
                    )])
                } else {
                    Ok(vec![Response::text(
                        "I don't know that exercise. Pick one from the menu or enter your own.",
                        prompt::exercise_menu(&catalog),
                    )])
                }
            }
            _ => Ok(vec![Response::notice(prompt::UNKNOWN_SELECTION)]),
        }
    }

    fn handle_set_count(session: &mut UserSession, input: UserInput) -> Vec<Response> {
        let UserInput::Text(text) = input else {
            return vec![Response::notice(prompt::UNKNOWN_SELECTION)];
        };

        match text.parse::<u32>() {
            Ok(sets) if sets > 0 => {
                session.pending.sets = Some(sets);
                session.state = DialogueState::AwaitWeight;
                let exercise = session.pending.exercise.as_deref().unwrap_or_default();
                vec![Response::text(
                    format!("What weight (kg) for {exercise}? Enter 0 for bodyweight."),
                    prompt::cancel_menu(),
                )]
            }
            _ => vec![Response::text(
                "Enter a whole number greater than 0.",
                prompt::cancel_menu(),
            )],
        }
    }

    async fn handle_weight(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        let UserInput::Text(text) = input else {
            return Ok(vec![Response::notice(prompt::UNKNOWN_SELECTION)]);
        };

        let weight = match text.parse::<f64>() {
            Ok(w) if w.is_finite() && w >= 0.0 => w,
            _ => {
                return Ok(vec![Response::text(
                    "Enter a valid weight, e.g. 42.5 (or 0 for bodyweight).",
                    prompt::cancel_menu(),
                )]);
            }
        };

        let exercise = session
            .pending
            .exercise
            .clone()
            .ok_or_else(|| FitlogError::internal("weight step reached without an exercise"))?;
        let sets = session
            .pending
            .sets
            .ok_or_else(|| FitlogError::internal("weight step reached without a set count"))?;
        let entry = WorkoutEntry::new(exercise.clone(), sets, weight, session.pending.category)?;

        match self.workouts.append(&session.user_id, entry).await {
            Ok(()) => {
                session.reset();
                Ok(vec![Response::text(
                    format!("✅ Saved!\n{exercise}: {sets}x{weight} kg"),
                    prompt::main_menu(),
                )])
            }
            Err(e) => Ok(Self::abort_on_storage_failure(session, &e, "workout append")),
        }
    }

    async fn handle_hydration(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        let UserInput::Text(text) = input else {
            return Ok(vec![Response::notice(prompt::UNKNOWN_SELECTION)]);
        };

        let volume_ml = match text.parse::<u32>() {
            Ok(ml) if ml > 0 => ml,
            _ => {
                return Ok(vec![Response::text(
                    "Enter a whole number greater than 0.",
                    prompt::cancel_menu(),
                )]);
            }
        };

        let entry = HydrationEntry::new(volume_ml)?;
        match self.hydration.append(&session.user_id, entry).await {
            Ok(()) => {
                session.reset();
                Ok(vec![Response::text(
                    format!("✅ +{volume_ml} ml of water saved!"),
                    prompt::main_menu(),
                )])
            }
            Err(e) => Ok(Self::abort_on_storage_failure(
                session,
                &e,
                "hydration append",
            )),
        }
    }

    fn handle_new_exercise_category(session: &mut UserSession, input: UserInput) -> Vec<Response> {
        match input {
            UserInput::Menu(MenuCommand::Category(category)) => {
                session.pending.category = Some(category);
                session.state = DialogueState::AwaitNewExerciseName;
                vec![Response::text(
                    "What is your new exercise called?",
                    prompt::cancel_menu(),
                )]
            }
            _ => vec![Response::text(
                "Please pick one of the listed categories.",
                prompt::category_menu(),
            )],
        }
    }

    async fn handle_new_exercise_name(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        let UserInput::Text(name) = input else {
            return Ok(vec![Response::notice(prompt::UNKNOWN_SELECTION)]);
        };
        if name.is_empty() {
            return Ok(vec![Response::text(
                "The exercise name cannot be empty.",
                prompt::cancel_menu(),
            )]);
        }

        let category = session
            .pending
            .category
            .ok_or_else(|| FitlogError::internal("name step reached without a category"))?;

        match self
            .resolver
            .add_exercise(&session.user_id, category, &name)
            .await
        {
            Ok(AddExerciseOutcome::Added) => {
                session.reset();
                Ok(vec![Response::text(
                    format!("✨ Exercise '{name}' added to {category}!"),
                    prompt::main_menu(),
                )])
            }
            // Reported, not retried: the flow still completes.
            Ok(AddExerciseOutcome::AlreadyExists) => {
                session.reset();
                Ok(vec![Response::text(
                    format!("'{name}' already exists in {category}."),
                    prompt::main_menu(),
                )])
            }
            Err(e) => Ok(Self::abort_on_storage_failure(session, &e, "exercise add")),
        }
    }

    fn handle_template_name(session: &mut UserSession, input: UserInput) -> Vec<Response> {
        let UserInput::Text(name) = input else {
            return vec![Response::notice(prompt::UNKNOWN_SELECTION)];
        };
        if name.is_empty() {
            return vec![Response::text(
                "The workout name cannot be empty.",
                prompt::cancel_menu(),
            )];
        }

        session.pending.template_name = Some(name.clone());
        session.state = DialogueState::AwaitTemplateExerciseList;
        vec![Response::text(
            format!(
                "Now list the exercises for '{name}', separated by commas.\n\
                 For example: Plank, Squats, Push-ups"
            ),
            prompt::cancel_menu(),
        )]
    }

    async fn handle_template_exercises(
        &self,
        session: &mut UserSession,
        input: UserInput,
    ) -> Result<Vec<Response>> {
        let UserInput::Text(text) = input else {
            return Ok(vec![Response::notice(prompt::UNKNOWN_SELECTION)]);
        };

        // Duplicates within the list are kept as entered.
        let exercises: Vec<String> = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let name = session
            .pending
            .template_name
            .clone()
            .ok_or_else(|| FitlogError::internal("exercise list reached without a name"))?;

        match self
            .resolver
            .add_template(&session.user_id, &name, exercises.clone())
            .await
        {
            Ok(outcome) => {
                session.reset();
                let verb = match outcome {
                    AddTemplateOutcome::Added => "saved",
                    AddTemplateOutcome::Replaced => "updated",
                };
                Ok(vec![Response::text(
                    format!(
                        "✨ Workout '{name}' {verb}!\nExercises: {}",
                        exercises.join(", ")
                    ),
                    prompt::main_menu(),
                )])
            }
            Err(e) => Ok(Self::abort_on_storage_failure(session, &e, "template save")),
        }
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
