// State snapshots emitted to the render sink.
//
// Every successful engine operation returns one of these: a complete,
// consistent view of the session, never a delta. Hosts render it directly
// or serialize it (all payload types derive Serialize).

use serde::Serialize;

use super::engine::Phase;

/// A registered participant as seen by the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantView {
    pub id: u64,
    pub name: String,
}

/// A team, its drafted members, and its quota.
#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub id: u64,
    pub name: String,
    /// Members in draft order.
    pub members: Vec<ParticipantView>,
    /// Target size, present once a draft has been initialized.
    pub quota: Option<usize>,
}

/// The complete state of the session after an operation.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSnapshot {
    pub phase: Phase,
    /// 1-based round counter; 0 while in Setup.
    pub current_round: u32,
    /// Id of the team whose turn is next, during the Draft phase.
    pub current_team_id: Option<u64>,
    pub teams: Vec<TeamView>,
    /// All registered participants, drafted or not.
    pub participants: Vec<ParticipantView>,
    /// Undrafted participants left in the pool.
    pub pool_remaining: usize,
    /// Whether an `advance_pick` call can currently draw (drives button
    /// enablement in a UI host).
    pub can_pick: bool,
}

impl DraftSnapshot {
    /// Member counts per team, in registration order.
    pub fn member_counts(&self) -> Vec<usize> {
        self.teams.iter().map(|t| t.members.len()).collect()
    }
}
