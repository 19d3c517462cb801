//! Best-effort description of the process an error was raised in.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for [`EnvironmentInfo::is_production`].
pub const PRODUCTION_ENV_VAR: &str = "RUST_ENV";

/// Runtime family the process is executing on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Native,
    Wasm,
    #[default]
    Unknown,
}

impl Environment {
    pub fn current() -> Self {
        if cfg!(target_family = "wasm") {
            Environment::Wasm
        } else if cfg!(any(unix, windows)) {
            Environment::Native
        } else {
            Environment::Unknown
        }
    }
}

/// Host details available to native processes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub cpu_arch: String,
    pub os_type: String,
    pub os_family: String,
    pub hostname: Option<String>,
    pub executable: Option<String>,
    pub process_id: u32,
}

/// Snapshot of the runtime environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub environment: Environment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_production: Option<bool>,
}

impl EnvironmentInfo {
    /// Placeholder used when nothing could be collected.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Collects what the platform exposes. Each field degrades on its own;
    /// this never fails.
    pub fn collect() -> Self {
        let environment = Environment::current();
        if environment != Environment::Native {
            return Self { environment, ..Self::default() };
        }

        Self {
            environment,
            server_info: Some(ServerInfo::collect()),
            is_production: Some(
                std::env::var(PRODUCTION_ENV_VAR).is_ok_and(|value| value == "production"),
            ),
        }
    }
}

impl ServerInfo {
    fn collect() -> Self {
        let hostname = ["HOSTNAME", "COMPUTERNAME"]
            .iter()
            .find_map(|key| std::env::var(key).ok())
            .filter(|name| !name.is_empty());

        let executable = match std::env::current_exe() {
            Ok(path) => Some(path.display().to_string()),
            Err(error) => {
                tracing::warn!(%error, "could not resolve current executable");
                None
            }
        };

        Self {
            cpu_arch: std::env::consts::ARCH.to_string(),
            os_type: std::env::consts::OS.to_string(),
            os_family: std::env::consts::FAMILY.to_string(),
            hostname,
            executable,
            process_id: std::process::id(),
        }
    }
}
