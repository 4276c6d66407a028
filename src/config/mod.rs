#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod league;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use league::LeagueConfig;
