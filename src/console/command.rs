#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    New,
    Setup(String),
    Move { from: String, to: String },
    Moves(String),
    Pieces(String),
    History,
    Status,
    Turn,
    Clocks,
    Captured,
    Notation,
    Show,
    Set { name: String, value: Option<String> },
    Options,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let arg = |i: usize| parts.get(i).map(|v| (*v).to_string());
    let unknown = || ConsoleCommand::Unknown(trimmed.to_string());

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "new" => ConsoleCommand::New,
        "setup" if parts.len() > 1 => ConsoleCommand::Setup(parts[1..].join(" ")),
        "move" | "shift" => match (arg(1), arg(2)) {
            (Some(from), Some(to)) if parts.len() == 3 => ConsoleCommand::Move { from, to },
            _ => unknown(),
        },
        "moves" => arg(1).map_or_else(unknown, ConsoleCommand::Moves),
        "pieces" => arg(1).map_or_else(unknown, ConsoleCommand::Pieces),
        "history" => ConsoleCommand::History,
        "status" => ConsoleCommand::Status,
        "turn" => ConsoleCommand::Turn,
        "clocks" => ConsoleCommand::Clocks,
        "captured" => ConsoleCommand::Captured,
        "notation" => ConsoleCommand::Notation,
        "show" => ConsoleCommand::Show,
        "set" => match arg(1) {
            Some(name) => ConsoleCommand::Set {
                name,
                value: arg(2),
            },
            None => unknown(),
        },
        "options" => ConsoleCommand::Options,
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => unknown(),
    };

    Some(cmd)
}
