//! Minimal Transmission RPC client.
//!
//! Every call is a JSON `POST` to `http://<host>:<port><rpc-url>rpc`. The
//! daemon answers the first request of a session with `409 Conflict` and an
//! `X-Transmission-Session-Id` header; the request is replayed once with that
//! header set.

use std::fs;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::TorrentAdder;
use crate::types::errors::{CuratorError, CuratorResult};

pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";
pub const UNAUTHORIZED: &str = "unauthorized";
const RPC_TIMEOUT_SECS: u64 = 30;

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    9091
}

fn default_rpc_url() -> String {
    "/transmission/".into()
}

/// The RPC subset of the daemon's `settings.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RpcSettings {
    #[serde(default = "default_bind_address")]
    pub rpc_bind_address: String,
    #[serde(default = "default_port")]
    pub rpc_port: u16,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default)]
    pub rpc_username: String,
    #[serde(default)]
    pub rpc_authentication_required: bool,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            rpc_bind_address: default_bind_address(),
            rpc_port: default_port(),
            rpc_url: default_rpc_url(),
            rpc_username: String::new(),
            rpc_authentication_required: false,
        }
    }
}

impl RpcSettings {
    /// Read `<transmission_dir>/settings.json`.
    pub fn load(transmission_dir: &Path) -> CuratorResult<Self> {
        let path = transmission_dir.join("settings.json");
        let content = fs::read_to_string(&path).map_err(|e| {
            CuratorError::Config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn endpoint(&self) -> String {
        // A wildcard bind address is reachable on loopback.
        let host = match self.rpc_bind_address.trim().parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) if ip.is_unspecified() => "127.0.0.1".to_string(),
            Ok(IpAddr::V6(ip)) if ip.is_unspecified() => "[::1]".to_string(),
            Ok(IpAddr::V6(ip)) => format!("[{ip}]"),
            Ok(IpAddr::V4(ip)) => ip.to_string(),
            Err(_) if self.rpc_bind_address.trim().is_empty() => "127.0.0.1".to_string(),
            Err(_) => self.rpc_bind_address.trim().to_string(),
        };
        let mut path = self.rpc_url.clone();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if !path.ends_with('/') {
            path.push('/');
        }
        format!("http://{host}:{}{path}rpc", self.rpc_port)
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: String,
    #[serde(default)]
    arguments: Value,
}

/// `true` when the daemon rejected the credentials.
pub fn is_unauthorized(err: &CuratorError) -> bool {
    matches!(err, CuratorError::Rpc(msg) if msg == UNAUTHORIZED)
}

pub struct TransmissionClient {
    http: Client,
    endpoint: String,
    username: String,
    auth_required: bool,
    password: Option<String>,
    session_id: Option<String>,
}

impl TransmissionClient {
    pub fn new(settings: &RpcSettings) -> CuratorResult<Self> {
        // The daemon is local or on the LAN; system proxies do not apply.
        let http = Client::builder()
            .timeout(Duration::from_secs(RPC_TIMEOUT_SECS))
            .no_proxy()
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint(),
            username: settings.rpc_username.clone(),
            auth_required: settings.rpc_authentication_required,
            password: None,
            session_id: None,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password;
    }

    /// Cheap authenticated round trip used to validate credentials.
    pub fn check_session(&mut self) -> CuratorResult<()> {
        self.call("session-get", json!({ "fields": ["version"] }))
            .map(|_| ())
    }

    fn call(&mut self, method: &str, arguments: Value) -> CuratorResult<Value> {
        let body = json!({ "method": method, "arguments": arguments });

        for _ in 0..2 {
            let mut request = self.http.post(&self.endpoint).json(&body);
            if let Some(id) = &self.session_id {
                request = request.header(SESSION_ID_HEADER, id);
            }
            if self.auth_required || self.password.is_some() {
                request = request.basic_auth(&self.username, self.password.as_deref());
            }

            let response = request.send()?;
            match response.status() {
                StatusCode::CONFLICT => {
                    let id = response
                        .headers()
                        .get(SESSION_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .ok_or_else(|| {
                            CuratorError::Rpc("409 without a session id header".into())
                        })?;
                    log::debug!("Transmission session id refreshed");
                    self.session_id = Some(id.to_string());
                }
                StatusCode::UNAUTHORIZED => return Err(CuratorError::Rpc(UNAUTHORIZED.into())),
                status if !status.is_success() => {
                    return Err(CuratorError::Rpc(format!("{method} returned HTTP {status}")))
                }
                _ => {
                    let reply: RpcResponse = response.json()?;
                    if reply.result != "success" {
                        return Err(CuratorError::Rpc(format!("{method}: {}", reply.result)));
                    }
                    return Ok(reply.arguments);
                }
            }
        }

        Err(CuratorError::Rpc(format!(
            "{method}: session id handshake did not settle"
        )))
    }
}

impl TorrentAdder for TransmissionClient {
    fn add_torrent(&mut self, magnet_uri: &str) -> CuratorResult<()> {
        let arguments = self.call("torrent-add", json!({ "filename": magnet_uri }))?;
        if arguments.get("torrent-duplicate").is_some() {
            log::info!("Torrent already present in client");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transmission_tests.rs"]
mod tests;
