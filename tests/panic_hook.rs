//! Panic hook test
//!
//! Kept in its own test binary since the panic hook is process-wide.

use std::os::fd::AsRawFd;

use nix::pty::openpty;
use nix::sys::termios::{tcgetattr, LocalFlags, OutputFlags};
use nix::unistd::read;

use tilde::tty::{restore_on_panic, RawMode};

#[test]
fn test_panic_hook_restores_terminal_before_unwinding() {
    let pty = openpty(None, None).expect("Failed to open pty");
    let before = tcgetattr(&pty.slave).expect("tcgetattr");

    let raw = RawMode::enable(&pty.slave, 1).expect("Failed to enable raw mode");
    restore_on_panic(
        pty.slave.try_clone().unwrap(),
        pty.slave.try_clone().unwrap(),
        raw.original(),
        b"\x1b[2J\x1b[H".to_vec(),
    );

    let result = std::panic::catch_unwind(|| {
        panic!("fatal error while in raw mode");
    });
    assert!(result.is_err());

    // The guard is still alive, so only the hook can have done this
    let during = tcgetattr(&pty.slave).expect("tcgetattr");
    assert!(during.local_flags.contains(LocalFlags::ICANON));
    assert!(during.output_flags.contains(OutputFlags::OPOST));
    assert_eq!(during.local_flags, before.local_flags);
    assert_eq!(during.input_flags, before.input_flags);

    let mut buf = [0u8; 64];
    let n = read(pty.master.as_raw_fd(), &mut buf).expect("read from pty master");
    assert_eq!(&buf[..n], b"\x1b[2J\x1b[H");

    drop(raw);
}
