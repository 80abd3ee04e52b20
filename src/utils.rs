use std::io;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

/// Opens `url` in the system browser.
pub fn open_browser(url: &str) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    #[cfg(target_os = "windows")]
    let mut command = {
        // Empty title so "start" does not take the url for one
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    spawn_reaped(&mut command)
}

/// Spawns `command` and waits on it from a background thread so the child
/// is reaped when it exits.
pub fn spawn_reaped(command: &mut Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || child.wait()))
}
