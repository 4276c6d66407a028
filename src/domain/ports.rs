use crate::domain::model::{BalanceMode, RawPlayerRecord};

/// Static league input supplied once per run (or once per request).
pub trait ConfigProvider: Send + Sync {
    fn teams(&self) -> &[String];
    fn players(&self) -> &[RawPlayerRecord];
    fn balance_mode(&self) -> BalanceMode;
}
