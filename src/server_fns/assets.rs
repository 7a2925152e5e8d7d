use leptos::prelude::*;

/// Lottie JSON for the feature card at `index`.
///
/// The URL comes from the feature table on the server, so clients cannot
/// use this to fetch arbitrary hosts.
#[server]
pub async fn load_feature_animation(index: usize) -> Result<String, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::state::AppState;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    state.assets.feature_animation(index).await.map_err(|e| {
        tracing::warn!(index, error = %e, "feature animation unavailable");
        ServerFnError::new(e.to_string())
    })
}
