use crate::utils::error::{RosterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player as it arrives from the league configuration, all fields free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayerRecord {
    pub name: String,
    /// Guardian names joined by `" and "`.
    pub guardians: Option<String>,
    /// `"<feet>-<inches>"` or `"<n> inches"`; only the first token matters.
    pub height: Option<String>,
    /// `"YES"` means experienced, anything else does not.
    pub experience: Option<String>,
}

/// Player after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub guardians: Vec<String>,
    pub height: u32,
    pub experience: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum BalanceMode {
    /// Equal experienced / inexperienced halves per team.
    #[default]
    ExperienceSplit,
    /// Consecutive slices of the player list, ignoring experience.
    Contiguous,
}

impl BalanceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceMode::ExperienceSplit => "experience-split",
            BalanceMode::Contiguous => "contiguous",
        }
    }
}

impl fmt::Display for BalanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BalanceMode {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experience-split" | "experience" => Ok(BalanceMode::ExperienceSplit),
            "contiguous" => Ok(BalanceMode::Contiguous),
            other => Err(RosterError::InvalidConfigValueError {
                field: "balance.mode".to_string(),
                value: other.to_string(),
                reason: "Expected 'experience-split' or 'contiguous'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

/// Balancing result. Team order follows the input team list; players that
/// did not fit any team are kept apart in `unassigned`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamRoster {
    pub teams: Vec<Team>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unassigned: Vec<Player>,
}

impl TeamRoster {
    pub fn get(&self, team_name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == team_name)
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|team| team.name.as_str())
    }

    pub fn assigned_count(&self) -> usize {
        self.teams.iter().map(|team| team.players.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_mode_parsing() {
        assert_eq!(
            "experience-split".parse::<BalanceMode>().unwrap(),
            BalanceMode::ExperienceSplit
        );
        assert_eq!(" Contiguous ".parse::<BalanceMode>().unwrap(), BalanceMode::Contiguous);
        assert!("random".parse::<BalanceMode>().is_err());
        assert_eq!(BalanceMode::default().to_string(), "experience-split");
    }

    #[test]
    fn test_roster_lookup_keeps_order() {
        let roster = TeamRoster {
            teams: vec![
                Team { name: "Panthers".to_string(), players: vec![] },
                Team { name: "Bandits".to_string(), players: vec![] },
            ],
            unassigned: vec![],
        };

        assert_eq!(roster.team_names().collect::<Vec<_>>(), vec!["Panthers", "Bandits"]);
        assert!(roster.get("Bandits").is_some());
        assert!(roster.get("Warriors").is_none());
        assert_eq!(roster.assigned_count(), 0);
    }
}
