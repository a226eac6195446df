//! Command execution logic.
//!
//! Contains `interpret`, which parses a raw line, and `execute_command`,
//! which runs a parsed command against the virtual filesystem.

use crate::config::HELP_TEXT;
use crate::core::{SessionState, VirtualFs};
use crate::models::{Node, VirtualPath};

use super::{Command, Outcome, PathArg};

/// Interpret one raw input line in the context of a session.
///
/// Pure with respect to the session: side effects are described by the
/// returned [`Outcome`], never applied here.
pub fn interpret(line: &str, state: &SessionState, fs: &VirtualFs) -> Outcome {
    let cmd = Command::parse(line);
    tracing::debug!(?cmd, cwd = %state.current_path(), "interpreting command");
    execute_command(cmd, state.current_path(), fs)
}

/// Execute a parsed command and return its outcome.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `cwd` - Working directory the command runs in
/// * `fs` - Virtual filesystem
pub fn execute_command(cmd: Command, cwd: &VirtualPath, fs: &VirtualFs) -> Outcome {
    match cmd {
        Command::Empty => Outcome::suppressed(),
        Command::Help => Outcome::instant(HELP_TEXT.lines().map(str::to_string).collect()),
        Command::Pwd => Outcome::line(cwd.to_string()),
        Command::Ls => execute_ls(cwd, fs),
        Command::Cd(target) => execute_cd(target, cwd, fs),
        Command::Cat(file) => execute_cat(file, cwd, fs),
        Command::Clear => Outcome::clear_history(),
        Command::Unknown(input) => Outcome::instant(vec![
            format!("bash: {}: command not found", input),
            "Type 'help' for available commands".to_string(),
        ]),
    }
}

/// Execute `ls` command.
fn execute_ls(cwd: &VirtualPath, fs: &VirtualFs) -> Outcome {
    match fs.list_children(cwd) {
        Ok(entries) => Outcome::instant(
            entries
                .into_iter()
                .map(|entry| {
                    if entry.is_dir {
                        format!("{}/", entry.name)
                    } else {
                        entry.name
                    }
                })
                .collect(),
        ),
        Err(e) => {
            // Working directory always resolves; this only guards a broken invariant.
            tracing::warn!(error = %e, "working directory does not resolve, listing nothing");
            Outcome::instant(vec![])
        }
    }
}

/// Execute `cd` command.
fn execute_cd(target: PathArg, cwd: &VirtualPath, fs: &VirtualFs) -> Outcome {
    match target.as_str() {
        ".." if cwd.is_root() => Outcome::suppressed(),
        ".." => Outcome::change_directory(cwd.parent()),
        "~" | "/" => Outcome::change_directory(VirtualPath::root()),
        name => {
            let path = cwd.join(name);
            if fs.is_directory(&path) {
                Outcome::change_directory(path)
            } else {
                Outcome::line(format!("cd: {}: No such directory", target))
            }
        }
    }
}

/// Execute `cat` command.
fn execute_cat(file: PathArg, cwd: &VirtualPath, fs: &VirtualFs) -> Outcome {
    match fs.resolve(&cwd.join(file.as_str())) {
        Ok(Node::File { content, .. }) => Outcome::animated(content.clone()),
        Ok(Node::Directory { .. }) | Err(_) => {
            Outcome::line(format!("cat: {}: No such file or directory", file))
        }
    }
}
