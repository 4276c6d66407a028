pub mod balancer;
pub mod engine;
pub mod normalizer;
pub mod stats;

pub use crate::domain::model::{BalanceMode, Player, RawPlayerRecord, Team, TeamRoster};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
