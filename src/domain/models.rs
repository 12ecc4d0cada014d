use crate::domain::constants::{
    DEFAULT_ARPING, DEFAULT_INTERFACE, DEFAULT_PING, DEFAULT_TARGET_IP, DEFAULT_TCP_SCRIPT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_UDP_HELPER,
};
use serde::{Deserialize, Serialize};

fn default_target_ip() -> String {
    DEFAULT_TARGET_IP.to_string()
}

fn default_interface() -> String {
    DEFAULT_INTERFACE.to_string()
}

fn default_arping() -> String {
    DEFAULT_ARPING.to_string()
}

fn default_ping() -> String {
    DEFAULT_PING.to_string()
}

fn default_udp_helper() -> String {
    DEFAULT_UDP_HELPER.to_string()
}

fn default_tcp_script() -> String {
    DEFAULT_TCP_SCRIPT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub helpers: HelperConfig,
    #[serde(default)]
    pub limits: LimitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_target_ip")]
    pub ip: String,
    #[serde(default = "default_interface")]
    pub interface: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            ip: default_target_ip(),
            interface: default_interface(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HelperConfig {
    #[serde(default = "default_arping")]
    pub arping: String,
    #[serde(default = "default_ping")]
    pub ping: String,
    #[serde(default = "default_udp_helper")]
    pub udp_helper: String,
    #[serde(default = "default_tcp_script")]
    pub tcp_script: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            arping: default_arping(),
            ping: default_ping(),
            udp_helper: default_udp_helper(),
            tcp_script: default_tcp_script(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Result of one protocol-layer check. The captured output is kept so the
/// command layer can dump it on failure where the check calls for it.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub protocol: String,
    pub passed: bool,
    pub output: String,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
