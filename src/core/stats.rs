use crate::core::{Player, Team};
use serde::Serialize;

/// Aggregate numbers shown for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub team: String,
    pub total_players: usize,
    pub experienced: usize,
    pub inexperienced: usize,
    /// `None` for a team with no players.
    pub average_height: Option<f64>,
    pub player_names: Vec<String>,
    /// All guardians of the team, flattened in roster order.
    pub guardians: Vec<String>,
}

impl TeamStats {
    pub fn from_team(team: &Team) -> Self {
        Self::from_players(&team.name, &team.players)
    }

    pub fn from_players(team: &str, players: &[Player]) -> Self {
        let experienced = players.iter().filter(|p| p.experience).count();

        let average_height = if players.is_empty() {
            None
        } else {
            let total: u64 = players.iter().map(|p| u64::from(p.height)).sum();
            Some(total as f64 / players.len() as f64)
        };

        Self {
            team: team.to_string(),
            total_players: players.len(),
            experienced,
            inexperienced: players.len() - experienced,
            average_height,
            player_names: players.iter().map(|p| p.name.clone()).collect(),
            guardians: players.iter().flat_map(|p| p.guardians.iter().cloned()).collect(),
        }
    }

    pub fn player_preview(&self, limit: usize) -> String {
        join_first(&self.player_names, limit)
    }

    pub fn guardian_preview(&self, limit: usize) -> String {
        join_first(&self.guardians, limit)
    }
}

fn join_first(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, guardians: &[&str], height: u32, experience: bool) -> Player {
        Player {
            name: name.to_string(),
            guardians: guardians.iter().map(|g| g.to_string()).collect(),
            height,
            experience,
        }
    }

    #[test]
    fn test_counts_and_average() {
        let players = vec![
            player("Karl Saygan", &["Heather Bledsoe"], 42, true),
            player("Matt Gill", &["Charles Gill", "Sylvia Gill"], 40, false),
            player("Sammy Adams", &["Jeff Adams"], 45, false),
        ];

        let stats = TeamStats::from_players("Panthers", &players);

        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.experienced, 1);
        assert_eq!(stats.inexperienced, 2);
        let average = stats.average_height.unwrap();
        assert!((average - 127.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(
            stats.guardians,
            vec!["Heather Bledsoe", "Charles Gill", "Sylvia Gill", "Jeff Adams"]
        );
    }

    #[test]
    fn test_empty_team_has_no_average() {
        let stats = TeamStats::from_players("Bandits", &[]);
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.average_height, None);
        assert_eq!(stats.player_preview(6), "");
    }

    #[test]
    fn test_preview_stops_at_limit() {
        let players: Vec<Player> = (1..=8)
            .map(|i| player(&format!("P{}", i), &[], 40, false))
            .collect();

        let stats = TeamStats::from_players("Warriors", &players);

        assert_eq!(stats.player_preview(6), "P1, P2, P3, P4, P5, P6");
        assert_eq!(stats.player_preview(100).matches(", ").count(), 7);
    }
}
