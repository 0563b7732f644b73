//! Exit handling: signal handlers and terminal cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the interactive screen owns the terminal.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Record whether the interactive screen (raw mode, alternate screen) is up.
pub fn mark_screen(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    if !SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    reset_terminal_termios();
    // Focus reporting off, cursor on, leave alternate screen, reset style
    const RESTORE: &[u8] = b"\x1b[?1004l\x1b[?25h\x1b[?1049l\x1b[0m";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Crash handler for SIGSEGV/SIGABRT - restore the terminal, then re-raise
extern "C" fn crash_handler(sig: libc::c_int) {
    unsafe {
        reset_terminal_termios();
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep secrets out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) };
}
