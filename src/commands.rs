//! Built-in REPL commands prefixed with `/`.

use crate::controller::SessionStats;

/// Session info available to built-in commands.
pub struct SessionInfo<'a> {
    pub endpoint: &'a str,
    pub stats: SessionStats,
}

/// Result of command handling.
pub enum CommandResult {
    /// Not a command — treat the input as a prompt.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A built-in command definition.
struct Command {
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    run: fn(&SessionInfo) -> CommandResult,
}

const COMMANDS: &[Command] = &[
    Command {
        name: "/help",
        aliases: &["/h", "/?"],
        description: "show this help",
        run: cmd_help,
    },
    Command {
        name: "/endpoint",
        aliases: &[],
        description: "show the enhancement service URL",
        run: cmd_endpoint,
    },
    Command {
        name: "/stats",
        aliases: &[],
        description: "show session activation counts",
        run: cmd_stats,
    },
    Command {
        name: "/quit",
        aliases: &["quit", "exit", "/exit"],
        description: "exit the REPL",
        run: cmd_quit,
    },
];

/// Try to handle input as a built-in command.
pub fn handle_command(input: &str, info: &SessionInfo<'_>) -> CommandResult {
    let cmd = input.trim();

    for command in COMMANDS {
        if cmd == command.name || command.aliases.contains(&cmd) {
            return (command.run)(info);
        }
    }

    // Unknown slash command
    if cmd.starts_with('/') {
        println!("unknown command: {cmd}");
        println!("type /help for available commands");
        return CommandResult::Handled;
    }

    CommandResult::NotACommand
}

// --- Command implementations ---

fn cmd_help(_info: &SessionInfo) -> CommandResult {
    let max_width = COMMANDS
        .iter()
        .map(|c| format_command_name(c.name, c.aliases).len())
        .max()
        .unwrap_or(10);

    for command in COMMANDS {
        let name = format_command_name(command.name, command.aliases);
        println!("  {name:<max_width$}  {}", command.description);
    }
    CommandResult::Handled
}

fn format_command_name(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}

fn cmd_endpoint(info: &SessionInfo) -> CommandResult {
    println!("  endpoint  {}", info.endpoint);
    CommandResult::Handled
}

fn cmd_stats(info: &SessionInfo) -> CommandResult {
    println!(
        "  session   {} enhanced, {} failed",
        info.stats.enhanced, info.stats.failed
    );
    CommandResult::Handled
}

fn cmd_quit(_info: &SessionInfo) -> CommandResult {
    CommandResult::Quit
}
