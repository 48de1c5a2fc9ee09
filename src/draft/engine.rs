// The draft engine: phase state machine, turn cursor, and the public
// operation surface consumed by a presentation layer.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use super::error::DraftError;
use super::pool::DraftPool;
use super::quota;
use super::registry::Registry;
use super::snapshot::{DraftSnapshot, ParticipantView, TeamView};

/// The three phases of a draft session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Draft,
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Setup => "setup",
            Phase::Draft => "draft",
            Phase::Results => "results",
        };
        f.write_str(s)
    }
}

/// Minimum team and participant counts required to start a draft.
const MIN_TEAMS: usize = 2;
const MIN_PARTICIPANTS: usize = 2;

/// A single draft session: registered teams and participants, the shuffled
/// pool, per-team quotas, and the turn cursor.
///
/// One instance per session, owned by whatever hosts it (the CLI, a test
/// driver). All operations are synchronous, atomic, and return the full
/// resulting [`DraftSnapshot`] on success; a rejected operation leaves the
/// engine exactly as it was.
#[derive(Debug)]
pub struct DraftEngine {
    registry: Registry,
    pool: DraftPool,
    /// Target size per team, parallel to the team list. Empty in Setup.
    quotas: Vec<usize>,
    phase: Phase,
    /// 1-based during Draft/Results; 0 in Setup.
    current_round: u32,
    current_team_index: usize,
    rng: StdRng,
}

impl DraftEngine {
    /// A fresh engine with an OS-seeded shuffle source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A fresh engine with a deterministic shuffle source, for reproducible
    /// drafts and exact-outcome tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        DraftEngine {
            registry: Registry::new(),
            pool: DraftPool::empty(),
            quotas: Vec::new(),
            phase: Phase::Setup,
            current_round: 0,
            current_team_index: 0,
            rng,
        }
    }

    // -----------------------------------------------------------------------
    // Registration (Setup phase)
    // -----------------------------------------------------------------------

    /// Register a team. Setup only.
    pub fn add_team(&mut self, name: &str) -> Result<DraftSnapshot, DraftError> {
        self.require_setup("register a team")?;
        let id = self.registry.add_team(name)?;
        debug!(team_id = id, "team registered");
        Ok(self.snapshot())
    }

    /// Register a participant. Setup only.
    pub fn add_participant(&mut self, name: &str) -> Result<DraftSnapshot, DraftError> {
        self.require_setup("register a participant")?;
        let id = self.registry.add_participant(name)?;
        debug!(participant_id = id, "participant registered");
        Ok(self.snapshot())
    }

    /// Remove a team by id. Setup only; unknown ids are a no-op.
    pub fn delete_team(&mut self, id: u64) -> Result<DraftSnapshot, DraftError> {
        self.require_setup("delete a team")?;
        self.registry.remove_team(id);
        Ok(self.snapshot())
    }

    /// Remove a participant by id. Setup only; unknown ids are a no-op.
    pub fn delete_participant(&mut self, id: u64) -> Result<DraftSnapshot, DraftError> {
        self.require_setup("delete a participant")?;
        self.registry.remove_participant(id);
        Ok(self.snapshot())
    }

    // -----------------------------------------------------------------------
    // Phase transitions
    // -----------------------------------------------------------------------

    /// Begin the draft: reset rosters, shuffle the pool, compute quotas, and
    /// set the turn cursor to round 1, first team.
    ///
    /// Requires the Setup phase with at least 2 teams and 2 participants;
    /// otherwise the engine stays in Setup and the shortfall is reported.
    pub fn start_draft(&mut self) -> Result<DraftSnapshot, DraftError> {
        if self.phase != Phase::Setup {
            return Err(DraftError::precondition(format!(
                "cannot start a draft from the {} phase",
                self.phase
            )));
        }

        let teams = self.registry.teams.len();
        let participants = self.registry.participants.len();
        if teams < MIN_TEAMS && participants < MIN_PARTICIPANTS {
            return Err(DraftError::precondition(
                "need at least 2 teams and 2 participants",
            ));
        }
        if teams < MIN_TEAMS {
            return Err(DraftError::precondition("need at least 2 teams"));
        }
        if participants < MIN_PARTICIPANTS {
            return Err(DraftError::precondition("need at least 2 participants"));
        }

        self.registry.reset_members();
        self.pool = DraftPool::shuffled(&self.registry.participants, &mut self.rng);
        self.quotas = quota::quotas(participants, teams)?;
        self.current_round = 1;
        self.current_team_index = 0;
        self.phase = Phase::Draft;

        info!(teams, participants, "draft started");
        Ok(self.snapshot())
    }

    /// Advance the draft by one turn.
    ///
    /// The current team draws the last participant from the pool unless it is
    /// already at quota, in which case the turn passes without a draw (the
    /// original behavior, preserved exactly). The cursor then moves to the
    /// next team, wrapping into a new round, and the engine transitions to
    /// Results once the pool is empty.
    pub fn advance_pick(&mut self) -> Result<DraftSnapshot, DraftError> {
        if self.phase != Phase::Draft {
            return Err(DraftError::precondition(format!(
                "cannot advance a pick in the {} phase",
                self.phase
            )));
        }

        if self.pool.is_empty() {
            // Normally unreachable: the transition below fires as soon as the
            // pool drains. Kept as the terminal guard.
            self.phase = Phase::Results;
            return Ok(self.snapshot());
        }

        let index = self.current_team_index;
        let team = &mut self.registry.teams[index];
        if team.members.len() < self.quotas[index] {
            if let Some(participant) = self.pool.draw() {
                debug!(
                    round = self.current_round,
                    team = %team.name,
                    participant = %participant.name,
                    "pick made"
                );
                team.members.push(participant);
            }
        } else {
            // A full team still consumes its turn without drawing.
            debug!(round = self.current_round, team = %team.name, "turn passed, team at quota");
        }

        self.current_team_index += 1;
        if self.current_team_index >= self.registry.teams.len() {
            self.current_team_index = 0;
            self.current_round += 1;
        }

        if self.pool.is_empty() {
            self.phase = Phase::Results;
            info!(rounds = self.current_round, "draft complete");
        }

        Ok(self.snapshot())
    }

    /// Abandon the current rosters and return to Setup.
    ///
    /// Registrations are preserved; members, quotas, the pool, and the turn
    /// cursor are cleared. Valid from Draft or Results.
    pub fn new_draft(&mut self) -> Result<DraftSnapshot, DraftError> {
        if self.phase == Phase::Setup {
            return Err(DraftError::precondition(
                "no draft in progress to reset",
            ));
        }

        self.registry.reset_members();
        self.pool.clear();
        self.quotas.clear();
        self.current_round = 0;
        self.current_team_index = 0;
        self.phase = Phase::Setup;

        info!("session reset to setup");
        Ok(self.snapshot())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current 1-based round; 0 while in Setup.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Id of the team whose turn is next, during the Draft phase.
    pub fn current_team(&self) -> Option<u64> {
        if self.phase != Phase::Draft {
            return None;
        }
        self.registry
            .teams
            .get(self.current_team_index)
            .map(|t| t.id)
    }

    /// Undrafted participants left in the pool.
    pub fn pool_remaining(&self) -> usize {
        self.pool.remaining()
    }

    /// Build a complete state snapshot for the render sink.
    pub fn snapshot(&self) -> DraftSnapshot {
        let teams = self
            .registry
            .teams
            .iter()
            .enumerate()
            .map(|(i, team)| TeamView {
                id: team.id,
                name: team.name.clone(),
                members: team
                    .members
                    .iter()
                    .map(|p| ParticipantView {
                        id: p.id,
                        name: p.name.clone(),
                    })
                    .collect(),
                quota: self.quotas.get(i).copied(),
            })
            .collect();

        let participants = self
            .registry
            .participants
            .iter()
            .map(|p| ParticipantView {
                id: p.id,
                name: p.name.clone(),
            })
            .collect();

        DraftSnapshot {
            phase: self.phase,
            current_round: self.current_round,
            current_team_id: self.current_team(),
            teams,
            participants,
            pool_remaining: self.pool.remaining(),
            can_pick: self.phase == Phase::Draft && !self.pool.is_empty(),
        }
    }

    fn require_setup(&self, action: &str) -> Result<(), DraftError> {
        if self.phase != Phase::Setup {
            return Err(DraftError::precondition(format!(
                "cannot {action} once the draft has started"
            )));
        }
        Ok(())
    }
}

impl Default for DraftEngine {
    fn default() -> Self {
        Self::new()
    }
}
