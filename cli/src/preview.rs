//! Opening saved images in the platform viewer.

use std::path::Path;
use std::process::{Command, Stdio};

/// Viewer launch command for the current platform.
fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Show `path` in the default image viewer.
///
/// Best effort: failures are logged and otherwise ignored.
pub fn open_image(path: &Path) {
    let result = viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(_) => tracing::debug!("opened {} in viewer", path.display()),
        Err(e) => tracing::warn!("could not open {}: {}", path.display(), e),
    }
}
