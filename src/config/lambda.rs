use crate::config::league::LeagueConfig;
use crate::core::{BalanceMode, ConfigProvider, RawPlayerRecord};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::env;
use std::path::Path;

pub const LEAGUE_CONFIG_VAR: &str = "LEAGUE_CONFIG";
pub const BALANCE_MODE_VAR: &str = "BALANCE_MODE";

/// Request-handler configuration, rebuilt from the environment per invocation.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub league: LeagueConfig,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let league_path = env::var(LEAGUE_CONFIG_VAR).ok();
        let mode = env::var(BALANCE_MODE_VAR).ok();
        Self::from_vars(league_path.as_deref(), mode.as_deref())
    }

    pub fn from_vars(league_path: Option<&str>, mode: Option<&str>) -> Result<Self> {
        // 空字串視同未設定
        let league_path = league_path.filter(|p| !p.trim().is_empty());
        let mut league = LeagueConfig::load(league_path.map(Path::new))?;

        if let Some(mode) = mode.filter(|m| !m.trim().is_empty()) {
            league.set_balance_mode(mode.parse()?);
        }

        Ok(Self { league })
    }
}

impl ConfigProvider for LambdaConfig {
    fn teams(&self) -> &[String] {
        self.league.teams()
    }

    fn players(&self) -> &[RawPlayerRecord] {
        self.league.players()
    }

    fn balance_mode(&self) -> BalanceMode {
        self.league.balance_mode()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.league.validate()?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RosterError;

    #[test]
    fn test_defaults_to_builtin_league() {
        let config = LambdaConfig::from_vars(None, None).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.teams().len(), 3);
        assert_eq!(config.balance_mode(), BalanceMode::ExperienceSplit);

        let blank = LambdaConfig::from_vars(Some(""), Some(" ")).unwrap();
        assert_eq!(blank.teams().len(), 3);
    }

    #[test]
    fn test_mode_override_from_env_value() {
        let config = LambdaConfig::from_vars(None, Some("contiguous")).unwrap();
        assert_eq!(config.balance_mode(), BalanceMode::Contiguous);

        assert!(matches!(
            LambdaConfig::from_vars(None, Some("fair")),
            Err(RosterError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_missing_league_file() {
        assert!(matches!(
            LambdaConfig::from_vars(Some("/nonexistent/league.toml"), None),
            Err(RosterError::IoError(_))
        ));
    }
}
