pub mod get;
pub mod put;

pub use get::RedisBusinessDirectory;
pub use put::upsert_business;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::business::BusinessSummary;

/// Lookup seam for the external business directory. Review creation and
/// import denormalize business fields through this, so the engine runs
/// against a stub in tests.
#[async_trait]
pub trait BusinessDirectory: Send + Sync {
    async fn resolve(&self, business_id: &str) -> Result<BusinessSummary, AppError>;
}
