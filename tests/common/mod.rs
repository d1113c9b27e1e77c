use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use portal_api::auth::{issue_token, Claims};

static SERVER: OnceLock<TestServer> = OnceLock::new();

/// Secret the spawned server and the token-minting helpers agree on.
pub const TEST_SECRET: &str = "integration-test-secret";

pub const TEST_BLIP_APP_KEY: &str = "blip-key-123";

/// Nothing listens here; proxy calls against it fail fast.
const UNREACHABLE_SERVICE: &str = "http://127.0.0.1:1";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/portal-api");
        cmd.env("PORTAL_API_PORT", port.to_string())
            .env("SESSION_SECRET", TEST_SECRET)
            .env("BLIP_APP_KEY", TEST_BLIP_APP_KEY)
            .env_remove("JITSI_SERVER_URL")
            .env("CLASS_SERVICE_URL", UNREACHABLE_SERVICE)
            .env("SCHEDULE_SERVICE_URL", UNREACHABLE_SERVICE)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/api/liveness", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Mint a bearer token the spawned server accepts.
pub fn token_for(name: &str, roles: &[&str]) -> String {
    let claims = Claims::new(
        uuid::Uuid::new_v4(),
        name.to_string(),
        roles.iter().map(|s| s.to_string()).collect(),
    );
    issue_token(&claims, TEST_SECRET).expect("failed to mint test token")
}

/// Client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build client")
}
