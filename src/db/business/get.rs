use async_trait::async_trait;
use redis::AsyncCommands;

use crate::db::business::BusinessDirectory;
use crate::db::store;
use crate::errors::AppError;
use crate::models::business::BusinessSummary;
use crate::state::RedisClient;

pub fn business_key(business_id: &str) -> String {
    format!("business:{business_id}")
}

pub struct RedisBusinessDirectory {
    redis: RedisClient,
}

impl RedisBusinessDirectory {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl BusinessDirectory for RedisBusinessDirectory {
    async fn resolve(&self, business_id: &str) -> Result<BusinessSummary, AppError> {
        let mut conn = store::connection(&self.redis).await?;
        let json: Option<String> = conn
            .get(business_key(business_id))
            .await
            .map_err(AppError::RedisCommandError)?;

        let json = json
            .ok_or_else(|| AppError::NotFound(format!("Business {business_id} not found")))?;

        serde_json::from_str(&json).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}
