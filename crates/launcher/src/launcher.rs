use crate::config::LauncherConfig;
use crate::process::{LaunchCommand, ProcessControl, SystemProcesses};
use tracing::{debug, info, warn};

/// Starts the viewer server unless it is already running.
///
/// Fire-and-forget: the spawned process is not supervised and its exit
/// status is never collected. A failed spawn only shows up later, when
/// resolving the viewer through the naming service fails.
pub struct ServerLauncher<P: ProcessControl = SystemProcesses> {
    config: LauncherConfig,
    control: P,
}

impl ServerLauncher<SystemProcesses> {
    pub fn new(config: LauncherConfig) -> Self {
        let control = SystemProcesses::new(config.presence_command.clone());
        Self { config, control }
    }
}

impl Default for ServerLauncher<SystemProcesses> {
    fn default() -> Self {
        Self::new(LauncherConfig::default())
    }
}

impl<P: ProcessControl> ServerLauncher<P> {
    pub fn with_control(config: LauncherConfig, control: P) -> Self {
        Self { config, control }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn control(&self) -> &P {
        &self.control
    }

    /// The command a launch with `args` would run.
    pub fn command<S: AsRef<str>>(&self, args: &[S]) -> LaunchCommand {
        LaunchCommand::new(&self.config.executable, args)
    }

    /// Spawn the server with `args` if it is not running, then wait for it
    /// to come up. Never reports failure.
    pub fn ensure_server_running<S: AsRef<str>>(&self, args: &[S]) {
        if self.control.is_running(&self.config.executable) {
            debug!(executable = %self.config.executable, "Viewer server already running");
            return;
        }

        let command = self.command(args);
        info!(command = %command, "Starting viewer server");
        if let Err(e) = self.control.spawn_detached(&command) {
            warn!(program = %command.program, error = %e, "Failed to start viewer server");
        }

        self.control.settle(self.config.settle_delay());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeProcesses {
        running: AtomicBool,
        start_on_spawn: bool,
        fail_spawn: bool,
        spawned: Mutex<Vec<LaunchCommand>>,
        settled: Mutex<Vec<Duration>>,
    }

    impl ProcessControl for FakeProcesses {
        fn is_running(&self, _executable: &str) -> bool {
            self.running.load(Ordering::SeqCst)
        }

        fn spawn_detached(&self, command: &LaunchCommand) -> std::io::Result<()> {
            self.spawned.lock().unwrap().push(command.clone());
            if self.fail_spawn {
                return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
            }
            if self.start_on_spawn {
                self.running.store(true, Ordering::SeqCst);
            }
            Ok(())
        }

        fn settle(&self, delay: Duration) {
            self.settled.lock().unwrap().push(delay);
        }
    }

    fn launcher(fake: FakeProcesses) -> ServerLauncher<FakeProcesses> {
        ServerLauncher::with_control(LauncherConfig::default(), fake)
    }

    #[test]
    fn test_running_server_is_left_alone() {
        let fake = FakeProcesses::default();
        fake.running.store(true, Ordering::SeqCst);
        let launcher = launcher(fake);

        launcher.ensure_server_running(&["--arg1", "val"]);
        launcher.ensure_server_running(&["--arg1", "val"]);

        assert!(launcher.control().spawned.lock().unwrap().is_empty());
        assert!(launcher.control().settled.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_server_is_spawned_then_settles() {
        let launcher = launcher(FakeProcesses::default());

        launcher.ensure_server_running(&["--arg1", "val"]);

        let spawned = launcher.control().spawned.lock().unwrap();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].program, "gepetto-gui");
        assert_eq!(spawned[0].args, vec!["--arg1", "val"]);
        assert_eq!(
            *launcher.control().settled.lock().unwrap(),
            vec![Duration::from_millis(500)]
        );
    }

    #[test]
    fn test_second_call_after_start_does_not_respawn() {
        let launcher = launcher(FakeProcesses {
            start_on_spawn: true,
            ..Default::default()
        });

        launcher.ensure_server_running::<&str>(&[]);
        launcher.ensure_server_running::<&str>(&[]);

        assert_eq!(launcher.control().spawned.lock().unwrap().len(), 1);
        assert_eq!(launcher.control().settled.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_spawn_failure_is_swallowed() {
        let launcher = launcher(FakeProcesses {
            fail_spawn: true,
            ..Default::default()
        });

        launcher.ensure_server_running(&["--help"]);

        assert_eq!(launcher.control().spawned.lock().unwrap().len(), 1);
        assert_eq!(launcher.control().settled.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_command_composition_is_deterministic() {
        let launcher = launcher(FakeProcesses::default());

        let empty = launcher.command::<&str>(&[]);
        assert_eq!(empty, launcher.command::<&str>(&[]));
        assert_eq!(empty.program, "gepetto-gui");
        assert!(empty.args.is_empty());

        let with_args = launcher.command(&["--arg1", "val"]);
        assert_eq!(with_args, launcher.command(&["--arg1".to_string(), "val".to_string()]));
        assert_eq!(with_args.to_string(), "gepetto-gui --arg1 val");
    }

    #[test]
    fn test_custom_executable_and_delay() {
        let config = LauncherConfig {
            executable: "gepetto-gui-dev".to_string(),
            settle_delay_ms: 50,
            ..Default::default()
        };
        let launcher = ServerLauncher::with_control(config, FakeProcesses::default());

        launcher.ensure_server_running(&["-v"]);

        assert_eq!(launcher.control().spawned.lock().unwrap()[0].program, "gepetto-gui-dev");
        assert_eq!(
            *launcher.control().settled.lock().unwrap(),
            vec![Duration::from_millis(50)]
        );
    }
}
