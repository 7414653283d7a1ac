//! Progress aggregation: turns stored history into chart-ready series.
//!
//! Both aggregations are pure functions of the record store's current
//! contents - nothing is cached, every request recomputes from a fresh
//! read. An empty result means "no data to chart", which callers report
//! distinctly from an error.

use crate::error::Result;
use crate::hydration::{HydrationEntry, HydrationLogRepository};
use crate::user::UserId;
use crate::workout::{WorkoutEntry, WorkoutLogRepository};
use chrono::{DateTime, Local, NaiveDate};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Time-ordered weight series per exercise.
pub type WorkoutSeries = BTreeMap<String, Vec<(DateTime<Local>, f64)>>;

/// Summed daily water intake, ordered by calendar date.
pub type HydrationSeries = Vec<(NaiveDate, u64)>;

/// Groups workout entries by exercise into time-ordered `(timestamp,
/// weight)` series.
///
/// Exercises with fewer than 2 recorded points are omitted entirely - a
/// single measurement is not charted as a lone dot.
pub fn workout_series(entries: &[WorkoutEntry]) -> WorkoutSeries {
    let mut series: WorkoutSeries = BTreeMap::new();
    for entry in entries {
        series
            .entry(entry.exercise.clone())
            .or_default()
            .push((entry.recorded_at, entry.weight));
    }

    series.retain(|_, points| points.len() >= 2);
    for points in series.values_mut() {
        points.sort_by_key(|(ts, _)| *ts);
    }
    series
}

/// Sums hydration entries per calendar date, ordered by date.
pub fn hydration_series(entries: &[HydrationEntry]) -> HydrationSeries {
    let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for entry in entries {
        *by_date.entry(entry.recorded_at.date_naive()).or_default() += u64::from(entry.volume_ml);
    }
    by_date.into_iter().collect()
}

/// Reads a user's history and aggregates it for charting.
pub struct ProgressAggregator {
    workouts: Arc<dyn WorkoutLogRepository>,
    hydration: Arc<dyn HydrationLogRepository>,
}

impl ProgressAggregator {
    /// Creates a new aggregator over the given stores.
    pub fn new(
        workouts: Arc<dyn WorkoutLogRepository>,
        hydration: Arc<dyn HydrationLogRepository>,
    ) -> Self {
        Self {
            workouts,
            hydration,
        }
    }

    /// Chart-ready weight series per exercise for one user.
    pub async fn workout_series(&self, user_id: &UserId) -> Result<WorkoutSeries> {
        let entries = self.workouts.list(user_id).await?;
        Ok(workout_series(&entries))
    }

    /// Chart-ready daily water intake for one user.
    pub async fn hydration_series(&self, user_id: &UserId) -> Result<HydrationSeries> {
        let entries = self.hydration.list(user_id).await?;
        Ok(hydration_series(&entries))
    }
}
