/// Errors from loading decorative animation assets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("No feature animation at index {0}")]
    UnknownFeature(usize),
    #[error("Animation request failed: {0}")]
    Request(String),
    #[error("Animation host answered with status {0}")]
    Status(u16),
    #[error("Animation payload is not JSON: {0}")]
    Decode(String),
}

/// Errors from the viewport observation layer
#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("IntersectionObserver unavailable: {0}")]
    ObserverUnavailable(String),
}
