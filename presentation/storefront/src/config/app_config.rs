use super::{
    cors_config, marketplace_config::MarketplaceConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub marketplace: MarketplaceConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            marketplace: MarketplaceConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
