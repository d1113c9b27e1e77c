mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn blip_config_hands_out_app_key() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/blip/config", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?["appKey"],
        common::TEST_BLIP_APP_KEY
    );
    Ok(())
}

#[tokio::test]
async fn jitsi_config_defaults_to_public_instance() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/jitsi/config", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["serverUrl"], "meet.jit.si");
    Ok(())
}

#[tokio::test]
async fn unknown_provider_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/zoom/config", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.json::<Value>().await?["error"].as_str().is_some());
    Ok(())
}
