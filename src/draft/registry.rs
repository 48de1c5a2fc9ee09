// Team and participant registration, with the uniqueness guard.

use serde::{Deserialize, Serialize};

use super::error::DraftError;

/// A registered participant. Once drafted, the participant moves from the
/// pool into exactly one team's member list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Engine-assigned identifier, unique within a session.
    pub id: u64,
    /// Display name, unique among participants (case-sensitive).
    pub name: String,
}

/// A registered team and the members drafted onto it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Engine-assigned identifier, unique within a session.
    pub id: u64,
    /// Display name, unique among teams (case-sensitive).
    pub name: String,
    /// Members in draft order. Empty until a draft assigns participants.
    pub members: Vec<Participant>,
}

/// The roster of registered teams and participants.
///
/// Owns name validation and uniqueness; phase rules (e.g. "no deletion once
/// a draft has started") live in the engine.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub teams: Vec<Team>,
    pub participants: Vec<Participant>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a team. Returns the new team's id.
    ///
    /// The name is trimmed before validation; empty names are rejected, as
    /// are exact-match duplicates of an existing team name.
    pub fn add_team(&mut self, name: &str) -> Result<u64, DraftError> {
        let name = validated_name(name, "team")?;
        if self.teams.iter().any(|t| t.name == name) {
            return Err(DraftError::DuplicateName {
                kind: "team",
                name,
            });
        }

        let id = self.allocate_id();
        self.teams.push(Team {
            id,
            name,
            members: Vec::new(),
        });
        Ok(id)
    }

    /// Register a participant. Returns the new participant's id.
    pub fn add_participant(&mut self, name: &str) -> Result<u64, DraftError> {
        let name = validated_name(name, "participant")?;
        if self.participants.iter().any(|p| p.name == name) {
            return Err(DraftError::DuplicateName {
                kind: "participant",
                name,
            });
        }

        let id = self.allocate_id();
        self.participants.push(Participant { id, name });
        Ok(id)
    }

    /// Remove a team by id. Unknown ids are a no-op.
    pub fn remove_team(&mut self, id: u64) {
        self.teams.retain(|t| t.id != id);
    }

    /// Remove a participant by id. Unknown ids are a no-op.
    pub fn remove_participant(&mut self, id: u64) {
        self.participants.retain(|p| p.id != id);
    }

    /// Clear every team's member list.
    pub fn reset_members(&mut self) {
        for team in &mut self.teams {
            team.members.clear();
        }
    }

    /// Total number of drafted members across all teams.
    pub fn rostered_count(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Trim a raw name and reject empty or whitespace-only input.
fn validated_name(raw: &str, field: &'static str) -> Result<String, DraftError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DraftError::Validation { field });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_team_assigns_unique_ids() {
        let mut registry = Registry::new();
        let red = registry.add_team("Red").unwrap();
        let blue = registry.add_team("Blue").unwrap();
        assert_ne!(red, blue);
        assert_eq!(registry.teams.len(), 2);
    }

    #[test]
    fn duplicate_team_name_rejected() {
        let mut registry = Registry::new();
        registry.add_team("Red").unwrap();
        let err = registry.add_team("Red").unwrap_err();
        assert_eq!(
            err,
            DraftError::DuplicateName {
                kind: "team",
                name: "Red".to_string(),
            }
        );
        assert_eq!(registry.teams.len(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.add_team("Red").unwrap();
        assert!(registry.add_team("red").is_ok());
    }

    #[test]
    fn names_are_trimmed_before_matching() {
        let mut registry = Registry::new();
        registry.add_participant("  Ana  ").unwrap();
        assert_eq!(registry.participants[0].name, "Ana");
        // The trimmed form collides with the stored name.
        assert!(matches!(
            registry.add_participant("Ana"),
            Err(DraftError::DuplicateName { .. })
        ));
    }

    #[test]
    fn empty_and_whitespace_names_rejected() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.add_team("").unwrap_err(),
            DraftError::Validation { field: "team" }
        );
        assert_eq!(
            registry.add_participant("   ").unwrap_err(),
            DraftError::Validation {
                field: "participant"
            }
        );
        assert!(registry.teams.is_empty());
        assert!(registry.participants.is_empty());
    }

    #[test]
    fn team_and_participant_names_are_independent() {
        let mut registry = Registry::new();
        registry.add_team("Ana").unwrap();
        assert!(registry.add_participant("Ana").is_ok());
    }

    #[test]
    fn remove_by_id() {
        let mut registry = Registry::new();
        let red = registry.add_team("Red").unwrap();
        registry.add_team("Blue").unwrap();
        registry.remove_team(red);
        assert_eq!(registry.teams.len(), 1);
        assert_eq!(registry.teams[0].name, "Blue");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut registry = Registry::new();
        registry.add_participant("Ana").unwrap();
        registry.remove_participant(9999);
        assert_eq!(registry.participants.len(), 1);
    }

    #[test]
    fn removed_name_can_be_reused() {
        let mut registry = Registry::new();
        let id = registry.add_team("Red").unwrap();
        registry.remove_team(id);
        assert!(registry.add_team("Red").is_ok());
    }

    #[test]
    fn reset_members_clears_all_teams() {
        let mut registry = Registry::new();
        registry.add_team("Red").unwrap();
        registry.teams[0].members.push(Participant {
            id: 100,
            name: "Ana".to_string(),
        });
        registry.reset_members();
        assert!(registry.teams[0].members.is_empty());
        assert_eq!(registry.rostered_count(), 0);
    }
}
