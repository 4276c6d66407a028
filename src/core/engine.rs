use crate::core::balancer::balance_teams;
use crate::core::normalizer::normalize_players;
use crate::core::{ConfigProvider, TeamRoster};
use crate::utils::error::Result;

pub struct RosterEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> RosterEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Normalize then balance. Every call starts again from the raw records.
    pub fn build(&self) -> Result<TeamRoster> {
        let mode = self.config.balance_mode();
        tracing::info!("Starting roster build ({} mode)", mode);

        // Normalize
        let raw_players = self.config.players();
        tracing::info!("Normalizing {} player records", raw_players.len());
        let players = normalize_players(raw_players)?;

        // Balance
        let teams = self.config.teams();
        tracing::info!("Balancing {} players across {} teams", players.len(), teams.len());
        let roster = balance_teams(&players, teams, mode)?;

        if !roster.unassigned.is_empty() {
            let names: Vec<&str> = roster.unassigned.iter().map(|p| p.name.as_str()).collect();
            tracing::warn!(
                "{} player(s) left without a team: {}",
                names.len(),
                names.join(", ")
            );
        }
        tracing::debug!("Roster: {:#?}", roster.teams);

        Ok(roster)
    }
}
