// Per-team quota calculation.

use super::error::DraftError;

/// Compute the target size for each team.
///
/// Every team gets `participants / teams`; the first `participants % teams`
/// teams (in registration order) get one extra, so the quotas always sum to
/// the participant count.
///
/// Pure and deterministic. `teams == 0` is rejected rather than dividing by
/// zero; callers guarantee at least 2 teams before a draft starts.
pub fn quotas(participants: usize, teams: usize) -> Result<Vec<usize>, DraftError> {
    if teams == 0 {
        return Err(DraftError::Configuration {
            message: "cannot compute quotas for zero teams".to_string(),
        });
    }

    let base = participants / teams;
    let remainder = participants % teams;

    Ok((0..teams)
        .map(|index| base + usize::from(index < remainder))
        .collect())
}
