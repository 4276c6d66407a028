use crate::config::LambdaConfig;
use crate::core::engine::RosterEngine;
use crate::core::{ConfigProvider, Player, TeamRoster};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TEAM_PARAMETER: &str = "team";
pub const TEAM_NOT_FOUND: &str = "Team not found";

/// Every outcome, including errors, is reported with this status.
pub const STATUS_OK: u16 = 200;

/// API Gateway style event; only the query string is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiRequest {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ApiRequest {
    pub fn for_team(team: &str) -> Self {
        Self {
            query_string_parameters: Some(HashMap::from([(
                TEAM_PARAMETER.to_string(),
                team.to_string(),
            )])),
        }
    }

    pub fn team(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(TEAM_PARAMETER)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON document encoded as a string.
    pub body: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ResponseBody<'a> {
    Team {
        #[serde(rename = "Team")]
        team: &'a str,
        #[serde(rename = "Stats")]
        stats: &'a [Player],
    },
    Error {
        #[serde(rename = "Error")]
        error: &'a str,
    },
}

/// Loads configuration from the environment and answers one request.
pub fn handle_request(request: &ApiRequest) -> ApiResponse {
    match LambdaConfig::from_env() {
        Ok(config) => handle_with_config(config, request),
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            error_response(&e.user_friendly_message())
        }
    }
}

/// Builds a fresh roster from `config` and answers one request.
pub fn handle_with_config<C>(config: C, request: &ApiRequest) -> ApiResponse
where
    C: ConfigProvider + Validate,
{
    match build_roster(config) {
        Ok(roster) => respond(&roster, request),
        Err(e) => {
            tracing::error!(
                "❌ Roster build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            error_response(&e.user_friendly_message())
        }
    }
}

fn build_roster<C: ConfigProvider + Validate>(config: C) -> Result<TeamRoster> {
    config.validate()?;
    RosterEngine::new(config).build()
}

/// Looks up the requested team in an already balanced roster.
pub fn respond(roster: &TeamRoster, request: &ApiRequest) -> ApiResponse {
    match request.team().and_then(|name| roster.get(name)) {
        Some(team) => {
            tracing::info!("Returning {} players for team {}", team.players.len(), team.name);
            encode(&ResponseBody::Team {
                team: &team.name,
                stats: &team.players,
            })
        }
        None => {
            tracing::info!("Team not found: {:?}", request.team());
            error_response(TEAM_NOT_FOUND)
        }
    }
}

fn error_response(message: &str) -> ApiResponse {
    encode(&ResponseBody::Error { error: message })
}

fn encode(body: &ResponseBody<'_>) -> ApiResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::error!("❌ Failed to serialize response body: {}", e);
        r#"{"Error":"Internal error"}"#.to_string()
    });

    ApiResponse {
        status_code: STATUS_OK,
        body,
    }
}
