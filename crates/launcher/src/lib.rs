//! Starts the `gepetto-gui` viewer server on demand.

pub mod config;
pub mod launcher;
pub mod process;

pub use config::{ConfigError, LauncherConfig};
pub use launcher::ServerLauncher;
pub use process::{LaunchCommand, ProcessControl, SystemProcesses};

/// Start `gepetto-gui` with `args` unless it is already running, using the
/// default launcher configuration.
pub fn ensure_server_running<S: AsRef<str>>(args: &[S]) {
    ServerLauncher::default().ensure_server_running(args);
}
