use crate::core::{Player, RawPlayerRecord};
use crate::utils::error::{RosterError, Result};

const GUARDIAN_SEPARATOR: &str = " and ";
const EXPERIENCED_FLAG: &str = "YES";

/// Normalizes every record, in input order. The first malformed height
/// aborts the whole set.
pub fn normalize_players(raw_players: &[RawPlayerRecord]) -> Result<Vec<Player>> {
    raw_players.iter().map(normalize_player).collect()
}

pub fn normalize_player(raw: &RawPlayerRecord) -> Result<Player> {
    Ok(Player {
        name: raw.name.clone(),
        guardians: parse_guardians(raw.guardians.as_deref()),
        height: parse_height(&raw.name, raw.height.as_deref())?,
        experience: parse_experience(raw.experience.as_deref()),
    })
}

/// 取第一個以空白分隔的欄位；"6-2" 這種 feet-inches 格式只取 feet
pub fn parse_height(player: &str, height: Option<&str>) -> Result<u32> {
    let malformed = || RosterError::MalformedHeight {
        player: player.to_string(),
        value: height.unwrap_or_default().to_string(),
    };

    let token = height
        .and_then(|h| h.split_whitespace().next())
        .ok_or_else(malformed)?;
    let leading = token.split('-').next().unwrap_or(token);

    leading.parse::<u32>().map_err(|_| malformed())
}

/// 只有完全等於 "YES" 才算有經驗（大小寫敏感）
pub fn parse_experience(experience: Option<&str>) -> bool {
    experience == Some(EXPERIENCED_FLAG)
}

pub fn parse_guardians(guardians: Option<&str>) -> Vec<String> {
    match guardians {
        Some(text) => text.split(GUARDIAN_SEPARATOR).map(str::to_string).collect(),
        None => Vec::new(),
    }
}
