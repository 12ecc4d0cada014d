use crate::domain::models::{CheckOutcome, ConfigFile};
use crate::services::exec::run_captured;
use std::time::Duration;

/// Success phrasing varies across arping implementations: iputils prints a
/// transmitted/received summary, Habets' arping prints a response count.
/// Either counts as a successful single-probe exchange.
const ARP_MARKERS: [&str; 2] = [
    "1 packets transmitted, 1 packets received",
    "Received 1 response",
];
const ICMP_MARKER: &str = "3 packets transmitted, 3 received";
const UDP_PAYLOAD: &str = "HELLO";
const TCP_MARKER: &str = "HTTP/1.1 200 OK";

pub fn arp_check(config: &ConfigFile) -> anyhow::Result<CheckOutcome> {
    let output = run_captured(
        &config.helpers.arping,
        &["-c", "1", "-I", &config.target.interface, &config.target.ip],
        probe_timeout(config),
    )?;
    Ok(CheckOutcome {
        protocol: "ARP".to_string(),
        passed: arp_output_ok(&output),
        output,
    })
}

pub fn icmp_check(config: &ConfigFile) -> anyhow::Result<CheckOutcome> {
    let output = run_captured(
        &config.helpers.ping,
        &["-c", "3", &config.target.ip],
        probe_timeout(config),
    )?;
    Ok(CheckOutcome {
        protocol: "ICMP(ping)".to_string(),
        passed: icmp_output_ok(&output),
        output,
    })
}

pub fn udp_check(config: &ConfigFile) -> anyhow::Result<CheckOutcome> {
    let output = run_captured(&config.helpers.udp_helper, &[], probe_timeout(config))?;
    Ok(CheckOutcome {
        protocol: "UDP".to_string(),
        passed: udp_output_ok(&output),
        output,
    })
}

pub fn tcp_check(config: &ConfigFile) -> anyhow::Result<CheckOutcome> {
    let output = run_captured(&config.helpers.tcp_script, &[], probe_timeout(config))?;
    Ok(CheckOutcome {
        protocol: "TCP(http)".to_string(),
        passed: tcp_output_ok(&output),
        output,
    })
}

fn probe_timeout(config: &ConfigFile) -> Duration {
    Duration::from_secs(config.limits.timeout_secs)
}

pub fn arp_output_ok(output: &str) -> bool {
    ARP_MARKERS.iter().any(|m| output.contains(m))
}

pub fn icmp_output_ok(output: &str) -> bool {
    output.contains(ICMP_MARKER)
}

/// Full-string equality, not a substring test: the helper echoes the payload
/// back byte-for-byte, so anything extra (even a trailing newline) is a miss.
pub fn udp_output_ok(output: &str) -> bool {
    output == UDP_PAYLOAD
}

pub fn tcp_output_ok(output: &str) -> bool {
    output.contains(TCP_MARKER)
}
