use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment: a temp `HOME`, stub probe tools written as
/// executable shell scripts, and a config file pointing the checker at them.
/// The fresh environment emits success markers for every layer; individual
/// tests overwrite stubs to produce failures.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub bin: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create stub tool dir");
        let config = tmp.path().join("config.toml");

        let env = Self {
            _tmp: tmp,
            home,
            bin,
            config,
        };

        env.stub(
            "arping",
            "echo \"ARPING 192.160.144.2 from 192.160.144.1 br0\"\n\
echo \"1 packets transmitted, 1 packets received, 0% unanswered (0 extra)\"",
        );
        env.stub(
            "ping",
            "echo \"3 packets transmitted, 3 received, 0% packet loss, time 2002ms\"",
        );
        env.stub("udp_test", "printf HELLO");
        env.stub(
            "test-tcp.sh",
            "echo \"HTTP/1.1 200 OK\"\necho \"Content-Length: 0\"",
        );

        let config_body = format!(
            "[target]\n\
ip = \"192.160.144.2\"\n\
interface = \"br0\"\n\
\n\
[helpers]\n\
arping = \"{arping}\"\n\
ping = \"{ping}\"\n\
udp_helper = \"{udp}\"\n\
tcp_script = \"{tcp}\"\n\
\n\
[limits]\n\
timeout_secs = 5\n",
            arping = env.bin.join("arping").display(),
            ping = env.bin.join("ping").display(),
            udp = env.bin.join("udp_test").display(),
            tcp = env.bin.join("test-tcp.sh").display(),
        );
        fs::write(&env.config, config_body).expect("write config fixture");

        env
    }

    /// Overwrites a stub probe tool with the given shell script body.
    pub fn stub(&self, name: &str, body: &str) {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write stub tool");
        let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("make stub executable");
    }

    pub fn remove_stub(&self, name: &str) {
        fs::remove_file(self.bin.join(name)).expect("remove stub tool");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("netsmoke").expect("netsmoke binary");
        cmd.env("HOME", &self.home)
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}
