use super::*;
use crate::catalog::{Category, CatalogRepository, UserCatalog};
use crate::user::UserId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

// Mock WorkoutLogRepository for testing
struct MockWorkoutRepository {
    entries: Mutex<HashMap<UserId, Vec<WorkoutEntry>>>,
    fail_writes: AtomicBool,
}

impl MockWorkoutRepository {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    fn count(&self, user_id: &UserId) -> usize {
        self.entries
            .lock()
            .unwrap()
            .get(user_id)
            .map_or(0, Vec::len)
    }

    fn last(&self, user_id: &UserId) -> Option<WorkoutEntry> {
        self.entries
            .lock()
            .unwrap()
            .get(user_id)
            .and_then(|v| v.last().cloned())
    }
}

#[async_trait::async_trait]
impl WorkoutLogRepository for MockWorkoutRepository {
    async fn list(&self, user_id: &UserId) -> crate::error::Result<Vec<WorkoutEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(user_id).cloned().unwrap_or_default())
    }

    async fn append(&self, user_id: &UserId, entry: WorkoutEntry) -> crate::error::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FitlogError::storage("disk full"));
        }
        let mut entries = self.entries.lock().unwrap();
        entries.entry(user_id.clone()).or_default().push(entry);
        Ok(())
    }
}

// Mock HydrationLogRepository for testing
struct MockHydrationRepository {
    entries: Mutex<HashMap<UserId, Vec<HydrationEntry>>>,
    fail_writes: AtomicBool,
}

impl MockHydrationRepository {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    fn count(&self, user_id: &UserId) -> usize {
        self.entries
            .lock()
            .unwrap()
            .get(user_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait::async_trait]
impl HydrationLogRepository for MockHydrationRepository {
    async fn list(&self, user_id: &UserId) -> crate::error::Result<Vec<HydrationEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(user_id).cloned().unwrap_or_default())
    }

    async fn append(&self, user_id: &UserId, entry: HydrationEntry) -> crate::error::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FitlogError::storage("disk full"));
        }
        let mut entries = self.entries.lock().unwrap();
        entries.entry(user_id.clone()).or_default().push(entry);
        Ok(())
    }
}

// Mock CatalogRepository for testing
struct MockCatalogRepository {
    catalogs: Mutex<HashMap<UserId, UserCatalog>>,
}

impl MockCatalogRepository {
    fn new() -> Self {
        Self {
            catalogs: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn load(&self, user_id: &UserId) -> crate::error::Result<UserCatalog> {
        let catalogs = self.catalogs.lock().unwrap();
        Ok(catalogs.get(user_id).cloned().unwrap_or_default())
    }

    async fn store(&self, user_id: &UserId, catalog: &UserCatalog) -> crate::error::Result<()> {
        let mut catalogs = self.catalogs.lock().unwrap();
        catalogs.insert(user_id.clone(), catalog.clone());
        Ok(())
    }
}

struct Fixture {
    engine: DialogueEngine,
    workouts: Arc<MockWorkoutRepository>,
    hydration: Arc<MockHydrationRepository>,
    session: UserSession,
}

fn fixture() -> Fixture {
    let workouts = Arc::new(MockWorkoutRepository::new());
    let hydration = Arc::new(MockHydrationRepository::new());
    let resolver = CatalogResolver::new(Arc::new(MockCatalogRepository::new()));
    let engine = DialogueEngine::new(workouts.clone(), hydration.clone(), resolver);
    Fixture {
        engine,
        workouts,
        hydration,
        session: UserSession::new(UserId::from("u1")),
    }
}

fn text(s: &str) -> UserInput {
    UserInput::Text(s.to_string())
}

fn menu(command: MenuCommand) -> UserInput {
    UserInput::Menu(command)
}

fn first_text(responses: &[Response]) -> &str {
    match &responses[0] {
        Response::Text { text, .. } => text,
        other => panic!("expected text response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_full_add_result_flow() {
    let mut f = fixture();

    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitExerciseChoice);

    f.engine.handle(&mut f.session, text("Squats")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitSetCount);

    f.engine.handle(&mut f.session, text("4")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitWeight);

    let responses = f.engine.handle(&mut f.session, text("52.5")).await.unwrap();

    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(f.session.pending.is_empty());
    assert!(first_text(&responses).contains("Squats: 4x52.5 kg"));

    let entry = f.workouts.last(&f.session.user_id).unwrap();
    assert_eq!(entry.exercise, "Squats");
    assert_eq!(entry.sets, 4);
    assert_eq!(entry.weight, 52.5);
    assert_eq!(entry.category, Some(Category::LowerBody));
    assert_eq!(f.workouts.count(&f.session.user_id), 1);
}

#[tokio::test]
async fn test_invalid_set_count_retries_in_place() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();
    f.engine.handle(&mut f.session, text("Squats")).await.unwrap();

    for bad in ["abc", "0", "-3", "2.5", ""] {
        f.engine.handle(&mut f.session, text(bad)).await.unwrap();
        assert_eq!(f.session.state, DialogueState::AwaitSetCount, "input {bad:?}");
    }
    assert_eq!(f.workouts.count(&f.session.user_id), 0);
}

#[tokio::test]
async fn test_invalid_weight_retries_zero_weight_accepted() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();
    f.engine.handle(&mut f.session, text("Plank")).await.unwrap();
    f.engine.handle(&mut f.session, text("3")).await.unwrap();

    for bad in ["abc", "-1", "NaN", ""] {
        f.engine.handle(&mut f.session, text(bad)).await.unwrap();
        assert_eq!(f.session.state, DialogueState::AwaitWeight, "input {bad:?}");
    }
    assert_eq!(f.workouts.count(&f.session.user_id), 0);

    // 0 means bodyweight and commits the entry
    f.engine.handle(&mut f.session, text("0")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert_eq!(f.workouts.last(&f.session.user_id).unwrap().weight, 0.0);
}

#[tokio::test]
async fn test_unknown_exercise_reprompts_without_clearing_pending() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();

    let responses = f
        .engine
        .handle(&mut f.session, text("Underwater basket weaving"))
        .await
        .unwrap();

    assert_eq!(f.session.state, DialogueState::AwaitExerciseChoice);
    assert!(first_text(&responses).contains("don't know"));
    assert_eq!(f.workouts.count(&f.session.user_id), 0);
}

#[tokio::test]
async fn test_free_text_exercise_accepted_verbatim() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::FreeTextExercise))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitExerciseChoice);

    f.engine
        .handle(&mut f.session, text("Farmer's walk"))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitSetCount);

    f.engine.handle(&mut f.session, text("5")).await.unwrap();
    f.engine.handle(&mut f.session, text("24")).await.unwrap();

    let entry = f.workouts.last(&f.session.user_id).unwrap();
    assert_eq!(entry.exercise, "Farmer's walk");
    assert_eq!(entry.category, None);
}

#[tokio::test]
async fn test_cancel_from_every_state_leaves_store_unchanged() {
    for state in [
        DialogueState::AwaitExerciseChoice,
        DialogueState::AwaitSetCount,
        DialogueState::AwaitWeight,
        DialogueState::AwaitHydrationVolume,
        DialogueState::AwaitNewExerciseCategory,
        DialogueState::AwaitNewExerciseName,
        DialogueState::AwaitTemplateName,
        DialogueState::AwaitTemplateExerciseList,
    ] {
        let mut f = fixture();
        f.session.state = state;
        f.session.pending.exercise = Some("Squats".to_string());
        f.session.pending.sets = Some(3);

        let responses = f
            .engine
            .handle(&mut f.session, UserInput::Command(ChatCommand::Cancel))
            .await
            .unwrap();

        assert_eq!(f.session.state, DialogueState::Idle, "state {state:?}");
        assert!(f.session.pending.is_empty());
        assert!(first_text(&responses).contains("cancelled"));
        assert_eq!(f.workouts.count(&f.session.user_id), 0);
        assert_eq!(f.hydration.count(&f.session.user_id), 0);
    }
}

#[tokio::test]
async fn test_storage_failure_on_weight_aborts_to_idle() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();
    f.engine.handle(&mut f.session, text("Squats")).await.unwrap();
    f.engine.handle(&mut f.session, text("4")).await.unwrap();

    f.workouts.fail_writes.store(true, Ordering::SeqCst);
    let responses = f.engine.handle(&mut f.session, text("50")).await.unwrap();

    // Abort, not retry-in-place: safe landing in Idle, nothing persisted.
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(f.session.pending.is_empty());
    assert!(first_text(&responses).contains("Nothing was recorded"));
    assert_eq!(f.workouts.count(&f.session.user_id), 0);
}

#[tokio::test]
async fn test_hydration_flow() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::TrackWater))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitHydrationVolume);

    for bad in ["abc", "0", "-100", "1.5"] {
        f.engine.handle(&mut f.session, text(bad)).await.unwrap();
        assert_eq!(
            f.session.state,
            DialogueState::AwaitHydrationVolume,
            "input {bad:?}"
        );
    }
    assert_eq!(f.hydration.count(&f.session.user_id), 0);

    let responses = f.engine.handle(&mut f.session, text("300")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(first_text(&responses).contains("+300 ml"));
    assert_eq!(f.hydration.count(&f.session.user_id), 1);
}

#[tokio::test]
async fn test_hydration_storage_failure_aborts_to_idle() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::TrackWater))
        .await
        .unwrap();

    f.hydration.fail_writes.store(true, Ordering::SeqCst);
    f.engine.handle(&mut f.session, text("300")).await.unwrap();

    assert_eq!(f.session.state, DialogueState::Idle);
    assert_eq!(f.hydration.count(&f.session.user_id), 0);
}

#[tokio::test]
async fn test_add_exercise_flow_and_duplicate() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddExercise))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitNewExerciseCategory);

    // Free text is not a category
    f.engine.handle(&mut f.session, text("Cardio")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitNewExerciseCategory);

    f.engine
        .handle(&mut f.session, menu(MenuCommand::Category(Category::Core)))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitNewExerciseName);

    let responses = f.engine.handle(&mut f.session, text("Dead bug")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(first_text(&responses).contains("added"));

    // Duplicate: notified, flow still completes back to Idle.
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddExercise))
        .await
        .unwrap();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::Category(Category::Core)))
        .await
        .unwrap();
    let responses = f.engine.handle(&mut f.session, text("Dead bug")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(first_text(&responses).contains("already exists"));
}

#[tokio::test]
async fn test_template_flow_splits_and_trims() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddTemplate))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitTemplateName);

    f.engine.handle(&mut f.session, text("Morning")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitTemplateExerciseList);

    let responses = f
        .engine
        .handle(&mut f.session, text(" Plank ,, Squats,  , Plank "))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    // Trimmed, empties dropped, duplicates kept in order.
    assert!(first_text(&responses).contains("Plank, Squats, Plank"));
}

#[tokio::test]
async fn test_idle_rejects_unrecognized_text() {
    let mut f = fixture();
    let responses = f.engine.handle(&mut f.session, text("hello?")).await.unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(first_text(&responses).contains("did not understand"));
}

#[tokio::test]
async fn test_help_does_not_change_state() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();

    f.engine
        .handle(&mut f.session, UserInput::Command(ChatCommand::Help))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::AwaitExerciseChoice);
}

#[tokio::test]
async fn test_start_resets_mid_flow() {
    let mut f = fixture();
    f.engine
        .handle(&mut f.session, menu(MenuCommand::AddResult))
        .await
        .unwrap();
    f.engine.handle(&mut f.session, text("Squats")).await.unwrap();

    f.engine
        .handle(&mut f.session, UserInput::Command(ChatCommand::Start))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(f.session.pending.is_empty());
}

#[tokio::test]
async fn test_progress_requests_emit_chart_responses() {
    let mut f = fixture();
    let responses = f
        .engine
        .handle(&mut f.session, menu(MenuCommand::Progress))
        .await
        .unwrap();
    assert_eq!(responses, vec![Response::Chart(ChartKind::Workout)]);

    let responses = f
        .engine
        .handle(&mut f.session, menu(MenuCommand::WaterProgress))
        .await
        .unwrap();
    assert_eq!(responses, vec![Response::Chart(ChartKind::Hydration)]);
    assert_eq!(f.session.state, DialogueState::Idle);
}

#[tokio::test]
async fn test_category_from_idle_shows_plan_and_stays() {
    let mut f = fixture();
    let responses = f
        .engine
        .handle(&mut f.session, menu(MenuCommand::Category(Category::LowerBody)))
        .await
        .unwrap();
    assert_eq!(f.session.state, DialogueState::Idle);
    assert!(first_text(&responses).contains("Leg day"));
}
