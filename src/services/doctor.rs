use crate::domain::models::{CheckItem, ConfigFile, DoctorReport};
use std::path::{Path, PathBuf};

fn tool_available(command: &str) -> bool {
    if command.contains('/') {
        return Path::new(command).exists();
    }
    std::env::var("PATH")
        .unwrap_or_default()
        .split(':')
        .any(|dir| !dir.is_empty() && PathBuf::from(dir).join(command).exists())
}

fn check_tool(name: &str, command: &str) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status: if tool_available(command) { "ok" } else { "missing" }.to_string(),
    }
}

/// Preflight for the check run: is every configured probe tool reachable,
/// and is a config file in effect or are we on built-in defaults.
pub fn environment_doctor(config: &ConfigFile, config_path: &Path) -> DoctorReport {
    let checks = vec![
        CheckItem {
            name: "config_file".to_string(),
            status: if config_path.exists() {
                "ok"
            } else {
                "built_in_defaults"
            }
            .to_string(),
        },
        check_tool("arping", &config.helpers.arping),
        check_tool("ping", &config.helpers.ping),
        check_tool("udp_helper", &config.helpers.udp_helper),
        check_tool("tcp_script", &config.helpers.tcp_script),
    ];

    let overall = if checks
        .iter()
        .all(|c| c.status == "ok" || c.status == "built_in_defaults")
    {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}
