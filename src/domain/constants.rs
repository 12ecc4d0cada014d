//! Built-in probe defaults, used when no config file overrides them.

pub const DEFAULT_TARGET_IP: &str = "192.160.144.2";
pub const DEFAULT_INTERFACE: &str = "br0";
pub const DEFAULT_ARPING: &str = "arping";
pub const DEFAULT_PING: &str = "ping";
pub const DEFAULT_UDP_HELPER: &str = "./udp_test";
pub const DEFAULT_TCP_SCRIPT: &str = "./test-tcp.sh";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
