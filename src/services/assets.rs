use reqwest::Client;
use serde::Deserialize;

use crate::config::SiteConfig;
use crate::content::notch::FEATURES;
use crate::models::AssetError;

/// Fetches the Lottie animations behind the feature cards.
///
/// Only URLs from the feature table are ever requested.
#[derive(Clone)]
pub struct AssetFetcher {
    client: Client,
}

impl AssetFetcher {
    pub fn new(config: &SiteConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.asset_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    pub async fn feature_animation(&self, index: usize) -> Result<String, AssetError> {
        let url = feature_url(index)?;

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AssetError::Request(e.to_string()))?;

        if !res.status().is_success() {
            return Err(AssetError::Status(res.status().as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| AssetError::Request(e.to_string()))?;
        let header = validate_animation(&body)?;

        tracing::debug!(
            index,
            url,
            bytes = body.len(),
            version = header.version.as_deref().unwrap_or("unknown"),
            layers = header.layers.len(),
            "feature animation fetched"
        );
        Ok(body)
    }
}

pub fn feature_url(index: usize) -> Result<&'static str, AssetError> {
    FEATURES
        .get(index)
        .map(|f| f.animation_url)
        .ok_or(AssetError::UnknownFeature(index))
}

/// The parts of a Lottie document worth logging.
#[derive(Debug, Deserialize)]
pub struct LottieHeader {
    #[serde(rename = "v")]
    pub version: Option<String>,
    #[serde(default)]
    pub layers: Vec<serde_json::Value>,
}

/// Lottie documents are JSON objects; anything else is rejected before it
/// reaches the player.
pub fn validate_animation(body: &str) -> Result<LottieHeader, AssetError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AssetError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Err(AssetError::Decode("expected a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AssetError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_features_map_to_table_urls() {
        assert_eq!(feature_url(0), Ok(FEATURES[0].animation_url));
        assert_eq!(feature_url(FEATURES.len()), Err(AssetError::UnknownFeature(FEATURES.len())));
    }

    #[test]
    fn only_json_objects_pass() {
        let header = validate_animation(r#"{"v":"5.5.7","layers":[{"ty":4}]}"#).unwrap();
        assert_eq!(header.version.as_deref(), Some("5.5.7"));
        assert_eq!(header.layers.len(), 1);
        assert!(validate_animation("{}").is_ok());
        assert!(matches!(validate_animation("[1,2]"), Err(AssetError::Decode(_))));
        assert!(matches!(validate_animation("<html>"), Err(AssetError::Decode(_))));
    }

    #[tokio::test]
    async fn unknown_index_fails_without_request() {
        let fetcher = AssetFetcher::new(&SiteConfig::default()).expect("client builds");
        let err = fetcher.feature_animation(42).await.unwrap_err();
        assert_eq!(err, AssetError::UnknownFeature(42));
    }
}
