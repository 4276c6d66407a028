use crate::utils::error::{RosterError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RosterError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 檢查隊伍名單：不可為空、不可有空白名稱、不可重複
pub fn validate_team_names(field_name: &str, teams: &[String]) -> Result<()> {
    if teams.is_empty() {
        return Err(RosterError::EmptyTeamList);
    }

    let mut seen = HashSet::new();
    for team in teams {
        validate_non_empty_string(field_name, team)?;
        if !seen.insert(team.as_str()) {
            return Err(RosterError::DuplicateTeam { team: team.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_team_names() {
        assert!(validate_team_names("league.teams", &names(&["Panthers", "Bandits"])).is_ok());
        assert!(matches!(
            validate_team_names("league.teams", &[]),
            Err(RosterError::EmptyTeamList)
        ));
        assert!(matches!(
            validate_team_names("league.teams", &names(&["Panthers", "Panthers"])),
            Err(RosterError::DuplicateTeam { team }) if team == "Panthers"
        ));
        assert!(validate_team_names("league.teams", &names(&["Panthers", "  "])).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("league.teams", 3, 1, 26).is_ok());
        assert!(validate_range("league.teams", 27, 1, 26).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(vec![1]);
        let absent: Option<Vec<i32>> = None;
        assert!(validate_required_field("players", &present).is_ok());
        assert!(matches!(
            validate_required_field("players", &absent),
            Err(RosterError::MissingConfigError { field }) if field == "players"
        ));
    }
}
