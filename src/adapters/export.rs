use crate::core::TeamRoster;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Serialize)]
struct RosterRow<'a> {
    team: &'a str,
    name: &'a str,
    guardians: String,
    experience: bool,
    height: u32,
}

/// One row per assigned player, teams in roster order.
pub fn write_csv<W: Write>(roster: &TeamRoster, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for team in &roster.teams {
        for player in &team.players {
            csv_writer.serialize(RosterRow {
                team: &team.name,
                name: &player.name,
                guardians: player.guardians.join(" and "),
                experience: player.experience,
                height: player.height,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Ordered array of `{ "name", "players" }`; unassigned players are left out.
pub fn write_json<W: Write>(roster: &TeamRoster, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &roster.teams)?;
    Ok(())
}

pub fn export_to_file(roster: &TeamRoster, path: &Path, format: ExportFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv(roster, &mut writer)?,
        ExportFormat::Json => write_json(roster, &mut writer)?,
    }
    writer.flush()?;

    tracing::info!("📁 Roster exported to {} as {:?}", path.display(), format);
    Ok(())
}
