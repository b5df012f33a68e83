use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::thread;

use crate::error::LaunchError;

/// Starts `path` as an independent process and returns without waiting.
///
/// The child runs from the directory that contains the executable and gets no
/// arguments. Its exit status is collected on a background thread and thrown
/// away, so finished games do not linger as zombies.
pub fn launch(path: &Path) -> Result<(), LaunchError> {
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(LaunchError::NotFound(path.to_path_buf()));
    }

    let executable = absolutize(path).map_err(|message| LaunchError::Spawn {
        path: path.to_path_buf(),
        message,
    })?;

    let mut command = Command::new(&executable);
    if let Some(parent) = executable.parent() {
        command.current_dir(parent);
    }
    detach(&mut command);

    let child = command.spawn().map_err(|error| LaunchError::Spawn {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;

    log::info!("launched {:?} (pid {})", executable, child.id());
    reap(child);
    Ok(())
}

fn reap(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || {
            if let Err(error) = child.wait() {
                log::debug!("failed to reap pid {pid}: {error}");
            }
        });
    if let Err(error) = spawned {
        log::warn!("pid {pid} will not be reaped: {error}");
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| format!("failed to resolve working directory: {error}"))
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}
