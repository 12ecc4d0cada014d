use crate::domain::models::{CheckOutcome, ConfigFile};
use crate::services::audit::audit;
use crate::services::checks::{arp_check, icmp_check, tcp_check, udp_check};

/// Runs the four protocol-layer checks in fixed order (ARP, ICMP, UDP, TCP),
/// printing one status line per check. A probe-level error aborts the run;
/// later checks do not execute.
pub fn handle_check_command(config: &ConfigFile) -> anyhow::Result<()> {
    let arp = arp_check(config)?;
    report(&arp);

    let icmp = icmp_check(config)?;
    report(&icmp);

    let udp = udp_check(config)?;
    report(&udp);

    let tcp = tcp_check(config)?;
    if !tcp.passed {
        // The TCP check is the only one that dumps its raw capture on failure.
        println!("{}", tcp.output);
    }
    report(&tcp);

    Ok(())
}

fn report(outcome: &CheckOutcome) {
    println!(
        "{} test. Result: {}",
        outcome.protocol,
        if outcome.passed { "OK" } else { "FAIL" }
    );
    audit(
        "check",
        serde_json::json!({"protocol": outcome.protocol, "passed": outcome.passed}),
    );
}
