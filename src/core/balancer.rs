use crate::core::{BalanceMode, Player, Team, TeamRoster};
use crate::utils::error::{RosterError, Result};
use std::collections::HashSet;

/// Distributes normalized players over `teams` using `mode`.
///
/// Both modes size teams with integer division and never redistribute the
/// remainder: players that do not fit end up in `TeamRoster::unassigned`.
/// An empty player list is valid and yields one empty roster per team.
pub fn balance_teams(players: &[Player], teams: &[String], mode: BalanceMode) -> Result<TeamRoster> {
    check_team_names(teams)?;

    let roster = match mode {
        BalanceMode::ExperienceSplit => balance_by_experience(players, teams),
        BalanceMode::Contiguous => balance_contiguous(players, teams),
    };

    tracing::debug!(
        "Balanced {} players into {} teams ({}), {} unassigned",
        roster.assigned_count(),
        roster.len(),
        mode,
        roster.unassigned.len()
    );

    Ok(roster)
}

fn check_team_names(teams: &[String]) -> Result<()> {
    if teams.is_empty() {
        return Err(RosterError::EmptyTeamList);
    }

    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !seen.insert(team.as_str()) {
            return Err(RosterError::DuplicateTeam { team: team.clone() });
        }
    }
    Ok(())
}

fn balance_by_experience(players: &[Player], teams: &[String]) -> TeamRoster {
    let half_per_team = players_per_team(players, teams) / 2;

    let (experienced, inexperienced): (Vec<&Player>, Vec<&Player>) =
        players.iter().partition(|player| player.experience);

    let assigned: Vec<Team> = teams
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let members = window(&experienced, index, half_per_team)
                .iter()
                .chain(window(&inexperienced, index, half_per_team))
                .map(|player| (*player).clone())
                .collect();
            Team {
                name: name.clone(),
                players: members,
            }
        })
        .collect();

    // 每組只消耗前 half_per_team * 隊數 名，其餘的不分配
    let consumed = half_per_team * teams.len();
    let unassigned = leftover(&experienced, consumed)
        .iter()
        .chain(leftover(&inexperienced, consumed))
        .map(|player| (*player).clone())
        .collect();

    TeamRoster {
        teams: assigned,
        unassigned,
    }
}

fn balance_contiguous(players: &[Player], teams: &[String]) -> TeamRoster {
    let per_team = players_per_team(players, teams);

    let assigned: Vec<Team> = teams
        .iter()
        .enumerate()
        .map(|(index, name)| Team {
            name: name.clone(),
            players: window(players, index, per_team).to_vec(),
        })
        .collect();

    TeamRoster {
        teams: assigned,
        unassigned: leftover(players, per_team * teams.len()).to_vec(),
    }
}

fn players_per_team(players: &[Player], teams: &[String]) -> usize {
    players.len() / teams.len()
}

fn leftover<T>(items: &[T], consumed: usize) -> &[T] {
    &items[consumed.min(items.len())..]
}

/// The `index`-th run of `size` elements, clamped to the end of `items`.
fn window<T>(items: &[T], index: usize, size: usize) -> &[T] {
    let start = (index * size).min(items.len());
    let end = (start + size).min(items.len());
    &items[start..end]
}
