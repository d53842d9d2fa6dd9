// src/config/auth.rs
// Session token and credential configuration

use serde::{Deserialize, Serialize};

pub const DEV_JWT_SECRET: &str = "sardinai-dev-secret-change-in-production";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    /// Seed demo@example.com / password123 into the in-memory user store
    pub seed_demo_user: bool,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: super::helpers::env_or("JWT_SECRET", DEV_JWT_SECRET),
            token_ttl_hours: super::helpers::env_parsed("JWT_TTL_HOURS", 24),
            bcrypt_cost: super::helpers::env_parsed("BCRYPT_COST", bcrypt::DEFAULT_COST),
            seed_demo_user: super::helpers::env_bool("SARDINAI_SEED_DEMO_USER", true),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jwt_secret.is_empty() {
            return Err(anyhow::anyhow!("JWT_SECRET cannot be empty"));
        }

        if self.token_ttl_hours <= 0 {
            return Err(anyhow::anyhow!("JWT_TTL_HOURS must be greater than 0"));
        }

        // bcrypt rejects costs outside 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(anyhow::anyhow!("BCRYPT_COST must be between 4 and 31"));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            seed_demo_user: true,
        }
    }
}
