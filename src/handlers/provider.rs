use axum::{extract::Path, Json};
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;

/// GET /api/:provider/config - client-integration settings
///
/// Known providers: `blip` (chat widget) and `jitsi` (video rooms).
pub async fn config_get(Path(provider): Path<String>) -> Result<Json<Value>, ApiError> {
    let providers = &config::config().providers;

    match provider.as_str() {
        "blip" => {
            let app_key = providers
                .blip_app_key
                .as_ref()
                .ok_or(ApiError::MissingConfig("BLIP_APP_KEY"))?;

            Ok(Json(json!({ "appKey": app_key })))
        }
        "jitsi" => Ok(Json(json!({ "serverUrl": providers.jitsi_server_url }))),
        _ => Err(ApiError::UnknownProvider(provider)),
    }
}
