//! Process-level tests for the `tilde` binary
//!
//! The editor runs on the slave side of a pseudoterminal while the test plays
//! the user on the master side.

use std::os::fd::{AsRawFd, OwnedFd};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg, OFlag};
use nix::pty::{openpty, OpenptyResult, Winsize};
use nix::sys::termios::{tcgetattr, Termios};
use nix::unistd::{read, write};

const TIMEOUT: Duration = Duration::from_secs(5);

fn assert_same_attributes(a: &Termios, b: &Termios) {
    assert_eq!(a.input_flags, b.input_flags);
    assert_eq!(a.output_flags, b.output_flags);
    assert_eq!(a.control_flags, b.control_flags);
    assert_eq!(a.local_flags, b.local_flags);
    assert_eq!(a.control_chars, b.control_chars);
}

/// A 40x10 pty whose master never blocks
fn open_pty() -> OpenptyResult {
    let ws = Winsize {
        ws_row: 10,
        ws_col: 40,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let pty = openpty(Some(&ws), None).expect("Failed to open pty");
    fcntl(pty.master.as_raw_fd(), FcntlArg::F_SETFL(OFlag::O_NONBLOCK)).expect("fcntl");
    pty
}

fn slave_stdio(slave: &OwnedFd) -> Stdio {
    Stdio::from(slave.try_clone().expect("Failed to clone pty slave"))
}

/// `tilde` with a clean home, so no user config is picked up
fn tilde(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tilde"));
    command.env("HOME", home).env_remove("RUST_LOG");
    command
}

/// Collect output from the master until `needle` shows up or time runs out
fn read_until(master: &OwnedFd, output: &mut Vec<u8>, needle: &[u8]) -> bool {
    let deadline = Instant::now() + TIMEOUT;
    let mut buf = [0u8; 4096];
    while Instant::now() < deadline {
        if output.windows(needle.len()).any(|w| w == needle) {
            return true;
        }
        match read(master.as_raw_fd(), &mut buf) {
            Ok(n) if n > 0 => output.extend_from_slice(&buf[..n]),
            Ok(_) | Err(Errno::EAGAIN) => thread::sleep(Duration::from_millis(10)),
            Err(e) => panic!("read from pty master failed: {}", e),
        }
    }
    false
}

fn wait_with_timeout(child: &mut Child) -> std::process::ExitStatus {
    let deadline = Instant::now() + TIMEOUT;
    loop {
        if let Some(status) = child.try_wait().expect("try_wait") {
            return status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("tilde did not exit");
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_quit_exits_zero_and_restores_terminal() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("notes.txt");
    std::fs::write(&file, "first\nsecond\n").unwrap();

    let pty = open_pty();
    let before = tcgetattr(&pty.slave).expect("tcgetattr");

    let mut child = tilde(home.path())
        .arg(&file)
        .stdin(slave_stdio(&pty.slave))
        .stdout(slave_stdio(&pty.slave))
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start tilde");

    // The first frame means raw mode is on and keys reach the editor
    let mut output = Vec::new();
    assert!(read_until(&pty.master, &mut output, b"\x1b[?25h"));

    write(pty.master.as_raw_fd(), b"\x1b[B").unwrap();
    assert!(read_until(&pty.master, &mut output, b"\x1b[2;1H\x1b[?25h"));

    write(pty.master.as_raw_fd(), b"\x11").unwrap();
    let status = wait_with_timeout(&mut child);
    assert_eq!(status.code(), Some(0));

    assert!(read_until(&pty.master, &mut output, b"\x1b[2J\x1b[H"));
    assert!(output.ends_with(b"\x1b[2J\x1b[H"));

    let after = tcgetattr(&pty.slave).expect("tcgetattr");
    assert_same_attributes(&after, &before);
}

#[test]
fn test_missing_file_exits_one_and_restores_terminal() {
    let home = tempfile::tempdir().unwrap();
    let pty = open_pty();
    let before = tcgetattr(&pty.slave).expect("tcgetattr");

    let result = tilde(home.path())
        .arg(home.path().join("missing.txt"))
        .stdin(slave_stdio(&pty.slave))
        .stdout(slave_stdio(&pty.slave))
        .output()
        .expect("Failed to run tilde");

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("tilde: Failed to open"), "{}", stderr);
    assert!(stderr.contains("missing.txt"));

    let after = tcgetattr(&pty.slave).expect("tcgetattr");
    assert_same_attributes(&after, &before);
}

#[test]
fn test_not_a_terminal_exits_one() {
    let home = tempfile::tempdir().unwrap();

    let result = tilde(home.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run tilde");

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to configure terminal"), "{}", stderr);
    assert!(result.stdout.is_empty());
}

#[test]
fn test_broken_config_exits_one() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("config.json");
    std::fs::write(&config, "{ not json").unwrap();

    let result = tilde(home.path())
        .arg("--config")
        .arg(&config)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run tilde");

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Invalid configuration"), "{}", stderr);
}

#[test]
fn test_version_and_bad_option() {
    let home = tempfile::tempdir().unwrap();

    let version = tilde(home.path()).arg("--version").output().unwrap();
    assert_eq!(version.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&version.stdout).trim(),
        format!("tilde {}", tilde::VERSION)
    );

    let bad = tilde(home.path()).arg("--bogus").output().unwrap();
    assert_eq!(bad.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&bad.stderr).contains("unknown option"));
}
