//! Child-process execution with a timeout and bounded output capture.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

/// Captured child process output.
#[derive(Debug)]
pub struct SessionOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Bytes discarded beyond the capture limit (stdout + stderr).
    pub truncated_bytes: usize,
    pub timed_out: bool,
}

impl SessionOutput {
    /// Last portion of stderr as lossy UTF-8, for error messages.
    pub fn stderr_tail(&self, max_bytes: usize) -> String {
        let start = self.stderr.len().saturating_sub(max_bytes);
        String::from_utf8_lossy(&self.stderr[start..]).into_owned()
    }
}

/// Run `cmd` to completion, killing it after `timeout`.
///
/// Stdout and stderr are drained concurrently while the child runs so the
/// pipes never fill up and deadlock; at most `output_limit_bytes` of each
/// stream is kept in memory, the rest is discarded while still draining.
pub fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    output_limit_bytes: usize,
) -> Result<SessionOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!(timeout_secs = timeout.as_secs(), "spawning child process");
    let mut child = cmd.spawn().context("spawn command")?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;

    let stdout_handle = thread::spawn(move || drain_limited(stdout, output_limit_bytes));
    let stderr_handle = thread::spawn(move || drain_limited(stderr, output_limit_bytes));

    let mut timed_out = false;
    let status = match child.wait_timeout(timeout).context("wait for command")? {
        Some(status) => status,
        None => {
            warn!(timeout_secs = timeout.as_secs(), "command timed out, killing");
            timed_out = true;
            child.kill().context("kill command")?;
            child.wait().context("wait command after kill")?
        }
    };

    let (stdout, stdout_dropped) = join_reader(stdout_handle).context("join stdout")?;
    let (stderr, stderr_dropped) = join_reader(stderr_handle).context("join stderr")?;
    let truncated_bytes = stdout_dropped + stderr_dropped;
    if truncated_bytes > 0 {
        warn!(truncated_bytes, "child output truncated");
    }

    debug!(exit_code = ?status.code(), timed_out, "command finished");
    Ok(SessionOutput {
        status,
        stdout,
        stderr,
        truncated_bytes,
        timed_out,
    })
}

fn join_reader(handle: thread::JoinHandle<Result<(Vec<u8>, usize)>>) -> Result<(Vec<u8>, usize)> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow!("output reader thread panicked")),
    }
}

/// Read a stream to EOF, keeping at most `limit` bytes. Returns the kept
/// bytes and the count of discarded ones.
fn drain_limited<R: Read>(mut reader: R, limit: usize) -> Result<(Vec<u8>, usize)> {
    let mut kept = Vec::new();
    let mut dropped = 0usize;
    let mut chunk = [0u8; 8192];

    loop {
        let n = reader.read(&mut chunk).context("read child output")?;
        if n == 0 {
            break;
        }
        let remaining = limit.saturating_sub(kept.len());
        let keep = n.min(remaining);
        kept.extend_from_slice(&chunk[..keep]);
        dropped += n - keep;
    }

    Ok((kept, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_exit_status() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("printf hello");
        let out = run_with_timeout(cmd, Duration::from_secs(5), 1024).expect("run");

        assert!(out.status.success());
        assert!(!out.timed_out);
        assert_eq!(out.stdout, b"hello");
    }

    #[test]
    fn bounds_captured_output() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("printf '0123456789'");
        let out = run_with_timeout(cmd, Duration::from_secs(5), 4).expect("run");

        assert_eq!(out.stdout, b"0123");
        assert_eq!(out.truncated_bytes, 6);
    }

    #[test]
    fn kills_child_on_timeout() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("sleep 10");
        let out = run_with_timeout(cmd, Duration::from_millis(100), 1024).expect("run");

        assert!(out.timed_out);
        assert!(!out.status.success());
    }

    #[test]
    fn stderr_tail_returns_last_bytes() {
        let out = SessionOutput {
            status: Command::new("true").status().expect("status"),
            stdout: Vec::new(),
            stderr: b"abcdef".to_vec(),
            truncated_bytes: 0,
            timed_out: false,
        };
        assert_eq!(out.stderr_tail(3), "def");
        assert_eq!(out.stderr_tail(100), "abcdef");
    }
}
