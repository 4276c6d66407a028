pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::console::ConsoleReporter;
pub use crate::adapters::request::{ApiRequest, ApiResponse};
pub use crate::config::{LambdaConfig, LeagueConfig};
pub use crate::core::{
    balancer::balance_teams, engine::RosterEngine, normalizer::normalize_players,
};
pub use crate::domain::model::{BalanceMode, Player, RawPlayerRecord, Team, TeamRoster};
pub use crate::utils::error::{Result, RosterError};
