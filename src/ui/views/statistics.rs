use super::Load;
use crate::api::error::RequestError;
use crate::api::models::StatisticsSummary;
use crate::ui::dispatch::Request;
use log::{info, warn};

pub const LOAD_FAILED: &str = "Failed to load statistics";

/// Single fetch on entry, nothing to interact with afterwards.
#[derive(Debug)]
pub struct StatisticsView {
    generation: u64,
    state: Load<StatisticsSummary>,
}

impl StatisticsView {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: Load::Loading,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &Load<StatisticsSummary> {
        &self.state
    }

    pub fn enter(&mut self) -> Request {
        self.generation += 1;
        self.state = Load::Loading;
        Request::GetStatistics
    }

    pub fn leave(&mut self) {
        self.generation += 1;
    }

    pub fn apply_statistics(&mut self, result: Result<StatisticsSummary, RequestError>) {
        self.state = match result {
            Ok(stats) => {
                info!("Loaded statistics for {} students", stats.total_students);
                Load::Ready(stats)
            }
            Err(e) => {
                warn!("{}: {}", LOAD_FAILED, e);
                Load::Failed(LOAD_FAILED.to_string())
            }
        };
    }
}

impl Default for StatisticsView {
    fn default() -> Self {
        Self::new()
    }
}
