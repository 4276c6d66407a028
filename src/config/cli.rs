use crate::config::league::LeagueConfig;
use crate::core::BalanceMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use crate::adapters::export::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster-balancer")]
#[command(about = "Balance a youth basketball league into teams and browse team stats")]
pub struct CliConfig {
    /// League TOML file (teams + players); the built-in league is used when omitted
    #[arg(long)]
    pub league: Option<PathBuf>,

    /// Override the balancing mode from the league file
    #[arg(long, value_enum)]
    pub mode: Option<BalanceMode>,

    /// Write the balanced roster to this file and exit instead of opening the menu
    #[arg(long)]
    pub export: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入聯盟設定並套用命令列覆蓋
    pub fn load_league(&self) -> Result<LeagueConfig> {
        let mut league = LeagueConfig::load(self.league.as_deref())?;

        if let Some(mode) = self.mode {
            league.set_balance_mode(mode);
            tracing::info!("🔧 Balance mode overridden to: {}", mode);
        }

        league.validate()?;
        Ok(league)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.export {
            validate_non_empty_string("export", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["roster-balancer"]);
        assert!(config.league.is_none());
        assert!(config.mode.is_none());
        assert_eq!(config.format, ExportFormat::Csv);
        assert!(config.validate().is_ok());

        let league = config.load_league().unwrap();
        assert_eq!(league.balance_mode(), BalanceMode::ExperienceSplit);
    }

    #[test]
    fn test_mode_flag_overrides_league() {
        let config = CliConfig::parse_from([
            "roster-balancer",
            "--mode",
            "contiguous",
            "--export",
            "roster.json",
            "--format",
            "json",
        ]);

        assert_eq!(config.format, ExportFormat::Json);
        let league = config.load_league().unwrap();
        assert_eq!(league.balance_mode(), BalanceMode::Contiguous);
    }
}
