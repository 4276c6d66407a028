use crate::core::{BalanceMode, ConfigProvider, RawPlayerRecord};
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_team_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 內建的預設聯盟（三隊、十八名球員）
pub const DEFAULT_LEAGUE: &str = include_str!("../../config/league.toml");

/// The console selector labels teams with a single letter.
pub const MAX_TEAMS: usize = 26;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub league: LeagueSection,
    pub balance: Option<BalanceSection>,
    pub players: Option<Vec<RawPlayerRecord>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSection {
    pub name: String,
    pub description: Option<String>,
    pub teams: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSection {
    pub mode: Option<BalanceMode>,
}

impl LeagueConfig {
    /// 載入內建的預設聯盟
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_LEAGUE)
    }

    /// 有指定檔案就讀檔，否則使用內建聯盟
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LEAGUE_NAME})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列或環境變數覆蓋平衡模式
    pub fn set_balance_mode(&mut self, mode: BalanceMode) {
        self.balance.get_or_insert_with(BalanceSection::default).mode = Some(mode);
    }

    pub fn name(&self) -> &str {
        &self.league.name
    }
}

impl ConfigProvider for LeagueConfig {
    fn teams(&self) -> &[String] {
        self.league.teams.as_deref().unwrap_or(&[])
    }

    fn players(&self) -> &[RawPlayerRecord] {
        self.players.as_deref().unwrap_or(&[])
    }

    fn balance_mode(&self) -> BalanceMode {
        self.balance
            .as_ref()
            .and_then(|balance| balance.mode)
            .unwrap_or_default()
    }
}

impl Validate for LeagueConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("league.name", &self.league.name)?;

        // 隊伍名單缺少或為空都無法分隊
        let teams = self.league.teams.as_deref().ok_or(RosterError::EmptyTeamList)?;
        validate_team_names("league.teams", teams)?;
        validate_range("league.teams", teams.len(), 1, MAX_TEAMS)?;

        // players = [] 合法，完全沒有 players 才是錯誤
        let players = self.players.as_deref().ok_or(RosterError::EmptyRoster)?;
        for player in players {
            validate_non_empty_string("players.name", &player.name)?;
        }

        tracing::debug!(
            "✅ League '{}' validated: {} teams, {} players",
            self.league.name,
            teams.len(),
            players.len()
        );
        Ok(())
    }
}
