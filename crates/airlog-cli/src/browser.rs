//! Opening URLs and files with the platform's default handler.

use std::io;
use std::process::{Command, Stdio};

/// Hand `target` to the desktop opener without waiting for it.
pub fn open(target: &str) -> io::Result<()> {
    opener_command(target)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(target);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(escape_for_cmd(target));
    command
}

/// Caret-escape cmd.exe metacharacters so `&` in a query string is not read
/// as a command separator.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn escape_for_cmd(target: &str) -> String {
    let mut escaped = String::with_capacity(target.len());
    for c in target.chars() {
        if matches!(c, '^' | '&' | '|' | '<' | '>' | '(' | ')' | '%' | '!') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    command
}
