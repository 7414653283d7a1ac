//! The top-level message use-case: one inbound message in, zero or more
//! outbound sends out.

use crate::adapter;
use crate::ports::{ChartPoint, ChartRenderer, ChartSeries, ChatTransport, InboundMessage};
use crate::session::SessionRegistry;
use fitlog_core::dialogue::{prompt, ChartKind, DialogueEngine, Response};
use fitlog_core::error::Result;
use fitlog_core::progress::ProgressAggregator;
use fitlog_core::user::UserId;
use std::sync::Arc;

/// Wires the session registry, the dialogue engine, and the progress
/// aggregator to the transport and chart-renderer ports.
///
/// Within one user's session messages are processed strictly in arrival
/// order: the session's mutex is held from lookup until the last reply
/// for the message has been handed to the transport. Messages from
/// different users proceed concurrently.
pub struct BotService {
    sessions: SessionRegistry,
    engine: DialogueEngine,
    progress: ProgressAggregator,
    transport: Arc<dyn ChatTransport>,
    renderer: Arc<dyn ChartRenderer>,
}

impl BotService {
    /// Creates a new service with an empty session registry.
    pub fn new(
        engine: DialogueEngine,
        progress: ProgressAggregator,
        transport: Arc<dyn ChatTransport>,
        renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            engine,
            progress,
            transport,
            renderer,
        }
    }

    /// The session registry, for host-driven eviction.
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Processes one inbound message end to end.
    ///
    /// User-input and storage problems are answered over the transport;
    /// only transport failures and internal inconsistencies surface as
    /// errors, and they affect no other user's session.
    pub async fn handle_message(&self, message: InboundMessage) -> Result<()> {
        let input = adapter::parse_message(&message.text, message.is_command);

        let session = self.sessions.obtain(&message.user_id).await;
        let mut session = session.lock().await;

        let responses = self.engine.handle(&mut session, input).await?;
        for response in responses {
            self.dispatch(&message.user_id, response).await?;
        }
        Ok(())
    }

    async fn dispatch(&self, user_id: &UserId, response: Response) -> Result<()> {
        match response {
            Response::Text { text, options } => {
                self.transport.send_text(user_id, &text, &options).await
            }
            Response::Chart(ChartKind::Workout) => self.send_workout_charts(user_id).await,
            Response::Chart(ChartKind::Hydration) => self.send_hydration_chart(user_id).await,
        }
    }

    /// One chart per exercise with at least two recorded points.
    async fn send_workout_charts(&self, user_id: &UserId) -> Result<()> {
        let series_by_exercise = match self.progress.workout_series(user_id).await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(
                    "[BotService] workout history read failed for user {}: {}",
                    user_id,
                    e
                );
                return self
                    .transport
                    .send_text(user_id, prompt::STORAGE_FAILURE, &prompt::main_menu())
                    .await;
            }
        };

        if series_by_exercise.is_empty() {
            return self
                .transport
                .send_text(user_id, prompt::NO_WORKOUT_DATA, &prompt::main_menu())
                .await;
        }

        for (exercise, points) in series_by_exercise {
            let series = ChartSeries {
                title: format!("Progress: {exercise}"),
                points: points
                    .into_iter()
                    .map(|(timestamp, weight)| ChartPoint {
                        timestamp: timestamp.naive_local(),
                        value: weight,
                    })
                    .collect(),
            };
            match self.renderer.render(&series).await {
                Ok(image) => {
                    self.transport
                        .send_image(user_id, image, &format!("Your progress: {exercise} 📈"))
                        .await?;
                }
                Err(e) => {
                    tracing::error!(
                        "[BotService] chart rendering failed for user {}: {}",
                        user_id,
                        e
                    );
                    return self
                        .transport
                        .send_text(user_id, prompt::STORAGE_FAILURE, &prompt::main_menu())
                        .await;
                }
            }
        }
        Ok(())
    }

    /// One bar series of summed daily intake.
    async fn send_hydration_chart(&self, user_id: &UserId) -> Result<()> {
        let series = match self.progress.hydration_series(user_id).await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(
                    "[BotService] hydration history read failed for user {}: {}",
                    user_id,
                    e
                );
                return self
                    .transport
                    .send_text(user_id, prompt::STORAGE_FAILURE, &prompt::main_menu())
                    .await;
            }
        };

        if series.is_empty() {
            return self
                .transport
                .send_text(user_id, prompt::NO_HYDRATION_DATA, &prompt::main_menu())
                .await;
        }

        let chart = ChartSeries {
            title: "Water intake".to_string(),
            points: series
                .into_iter()
                .map(|(date, volume_ml)| ChartPoint {
                    timestamp: date.and_time(chrono::NaiveTime::MIN),
                    value: volume_ml as f64,
                })
                .collect(),
        };
        match self.renderer.render(&chart).await {
            Ok(image) => {
                self.transport
                    .send_image(user_id, image, "Your water intake 💧")
                    .await
            }
            Err(e) => {
                tracing::error!(
                    "[BotService] chart rendering failed for user {}: {}",
                    user_id,
                    e
                );
                self.transport
                    .send_text(user_id, prompt::STORAGE_FAILURE, &prompt::main_menu())
                    .await
            }
        }
    }
}
