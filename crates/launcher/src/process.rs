use crate::config::LauncherConfig;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::debug;

/// A program plus its argument vector. Never goes through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new<S: AsRef<str>>(program: &str, args: &[S]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// OS capabilities the launcher needs. Swap in a fake for tests.
pub trait ProcessControl: Send + Sync {
    /// Whether a process named `executable` is in the process table.
    fn is_running(&self, executable: &str) -> bool;

    /// Start `command` without waiting for it or capturing its output.
    fn spawn_detached(&self, command: &LaunchCommand) -> std::io::Result<()>;

    /// Block the calling thread for `delay`.
    fn settle(&self, delay: Duration);
}

/// [`ProcessControl`] backed by the real operating system.
#[derive(Debug, Clone)]
pub struct SystemProcesses {
    presence_command: Vec<String>,
}

impl SystemProcesses {
    pub fn new(presence_command: Vec<String>) -> Self {
        Self { presence_command }
    }
}

impl Default for SystemProcesses {
    fn default() -> Self {
        Self::new(LauncherConfig::default().presence_command)
    }
}

impl ProcessControl for SystemProcesses {
    fn is_running(&self, executable: &str) -> bool {
        let Some((program, args)) = self.presence_command.split_first() else {
            return false;
        };

        let status = Command::new(program)
            .args(args)
            .arg(executable)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                debug!(executable, code = ?status.code(), "Presence check finished");
                status.success()
            }
            Err(e) => {
                debug!(executable, error = %e, "Presence check could not run");
                false
            }
        }
    }

    fn spawn_detached(&self, command: &LaunchCommand) -> std::io::Result<()> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // An unreaped child stays in the process table as a zombie and would
        // keep satisfying the presence check after it exits.
        let program = command.program.clone();
        std::thread::Builder::new()
            .name("gepetto-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) => debug!(program = %program, code = ?status.code(), "Viewer server exited"),
                Err(e) => debug!(program = %program, error = %e, "Could not reap viewer server"),
            })?;
        Ok(())
    }

    fn settle(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display_joins_with_spaces() {
        let cmd = LaunchCommand::new("gepetto-gui", &["--arg1", "val"]);
        assert_eq!(cmd.to_string(), "gepetto-gui --arg1 val");

        let empty: [&str; 0] = [];
        assert_eq!(LaunchCommand::new("gepetto-gui", &empty).to_string(), "gepetto-gui");
    }

    #[test]
    fn test_arguments_are_not_split() {
        let cmd = LaunchCommand::new("gepetto-gui", &["a b; rm -rf /"]);
        assert_eq!(cmd.args.len(), 1);
        assert_eq!(cmd.args[0], "a b; rm -rf /");
    }

    #[cfg(unix)]
    #[test]
    fn test_presence_follows_exit_status() {
        let found = SystemProcesses::new(vec!["true".to_string()]);
        assert!(found.is_running("gepetto-gui"));

        let missing = SystemProcesses::new(vec!["false".to_string()]);
        assert!(!missing.is_running("gepetto-gui"));
    }

    #[test]
    fn test_presence_check_without_program_is_not_running() {
        let unusable = SystemProcesses::new(vec!["gepetto-no-such-checker".to_string()]);
        assert!(!unusable.is_running("gepetto-gui"));
        assert!(!SystemProcesses::new(Vec::new()).is_running("gepetto-gui"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exited_server_is_not_reported_running() {
        use std::path::Path;
        use std::time::Instant;

        let Some(source) = ["/bin/true", "/usr/bin/true"]
            .into_iter()
            .map(Path::new)
            .find(|p| p.exists())
        else {
            return;
        };
        let name = format!("gvreap-{}", std::process::id());
        let exe = std::env::temp_dir().join(&name);
        std::fs::copy(source, &exe).unwrap();

        let system = SystemProcesses::default();
        let empty: [&str; 0] = [];
        let cmd = LaunchCommand::new(&exe.to_string_lossy(), &empty);

        // A freshly written executable can briefly be busy while another test forks.
        let mut spawned = system.spawn_detached(&cmd);
        for _ in 0..10 {
            if spawned.is_ok() {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
            spawned = system.spawn_detached(&cmd);
        }
        spawned.unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while system.is_running(&name) && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(50));
        }
        let still_running = system.is_running(&name);
        let _ = std::fs::remove_file(&exe);

        assert!(!still_running, "exited server still in the process table");
    }

    #[test]
    fn test_default_presence_command_matches_config() {
        let system = SystemProcesses::default();
        assert_eq!(system.presence_command, LauncherConfig::default().presence_command);
    }

    #[test]
    fn test_spawn_missing_program_errors() {
        let system = SystemProcesses::default();
        let empty: [&str; 0] = [];
        let cmd = LaunchCommand::new("gepetto-no-such-program", &empty);
        assert!(system.spawn_detached(&cmd).is_err());
    }
}
