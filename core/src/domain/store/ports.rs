use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for a durable string-keyed slot store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` when nothing was ever written
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
