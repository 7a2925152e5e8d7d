use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::assets::AssetFetcher;

#[derive(Clone)]
pub struct AppState {
    pub assets: AssetFetcher,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Result<Self, reqwest::Error> {
        let assets = AssetFetcher::new(&config)?;
        Ok(Self {
            assets,
            config: Arc::new(config),
        })
    }
}
