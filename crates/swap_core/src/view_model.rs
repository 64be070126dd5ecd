use crate::{AuthStage, Condition, ItemType, Location, SessionStatus};

/// Snapshot handed to whatever renders the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub stage: AuthStage,
    pub status: SessionStatus,
    pub query: String,
    pub item_type: Option<ItemType>,
    pub location: Option<Location>,
    pub condition: Option<Condition>,
    pub hit_count: usize,
    pub total_hits: u64,
    pub awaiting_response: bool,
    pub dirty: bool,
}
