use swarm_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid frame rate: {0}")]
    Rate(#[from] CoreError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
