use crate::model::tracker::TrackerState;
use anyhow::Result;

/// Durable slot holding the whole tracker document. Every save is a full
/// overwrite, so there is nothing to merge and nothing to corrupt halfway.
pub trait StateRepository {
    /// None means no usable prior state exists.
    fn load(&self) -> Result<Option<TrackerState>>;
    fn save(&self, state: &TrackerState) -> Result<()>;
}
