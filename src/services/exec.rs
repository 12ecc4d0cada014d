use anyhow::Context;
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Runs an external command and returns its captured output as text.
///
/// Both streams are drained concurrently and combined (stdout first, then
/// stderr). The child's exit status is not consulted: marker evaluation on
/// the captured text decides pass/fail. Spawn failures, timeouts, and
/// non-UTF-8 output are errors.
pub fn run_captured(program: &str, args: &[&str], timeout: Duration) -> anyhow::Result<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {}", program))?;

    let mut stdout = child.stdout.take().context("child stdout was not piped")?;
    let mut stderr = child.stderr.take().context("child stderr was not piped")?;
    let out_reader = std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stdout.read_to_end(&mut buf);
        buf
    });
    let err_reader = std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stderr.read_to_end(&mut buf);
        buf
    });

    let deadline = Instant::now() + timeout;
    loop {
        if child.try_wait()?.is_some() {
            break;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            anyhow::bail!("{} timed out after {:?}", program, timeout);
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    let mut bytes = out_reader.join().unwrap_or_default();
    bytes.extend(err_reader.join().unwrap_or_default());
    String::from_utf8(bytes).with_context(|| format!("{} produced non-utf8 output", program))
}
