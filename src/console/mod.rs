//! Line-oriented console session over the board's command and query surface.
//!
//! One command per line on the input, responses on the output. Errors are
//! reported as `error: ...` lines and the session carries on.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{
    Board, Color, GameStatus, NotationError, ShiftError, Square, SquareError, START_NOTATION,
};

pub mod command;
pub mod options;

use command::{parse_console_command, ConsoleCommand};
use options::ConsoleOptions;

/// Error type for console commands
#[derive(Debug)]
pub enum ConsoleError {
    /// Malformed setup string
    Notation(NotationError),
    /// Rejected move
    Shift(ShiftError),
    /// Malformed square label
    Square(SquareError),
    /// Color name other than white/black
    UnknownColor(String),
    /// `set` on an option that does not exist
    UnknownOption(String),
    /// `set` with a value the option does not accept
    InvalidOptionValue { name: String, value: String },
    /// Unrecognized or incomplete command
    UnknownCommand(String),
    /// Output could not be written
    Io(io::Error),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Notation(e) => write!(f, "Invalid setup: {e}"),
            ConsoleError::Shift(e) => write!(f, "{e}"),
            ConsoleError::Square(e) => write!(f, "{e}"),
            ConsoleError::UnknownColor(name) => {
                write!(f, "Unknown color '{name}', expected 'white' or 'black'")
            }
            ConsoleError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            ConsoleError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}', expected on/off")
            }
            ConsoleError::UnknownCommand(line) => {
                write!(f, "Unknown command '{line}' (try 'help')")
            }
            ConsoleError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Notation(e) => Some(e),
            ConsoleError::Shift(e) => Some(e),
            ConsoleError::Square(e) => Some(e),
            ConsoleError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NotationError> for ConsoleError {
    fn from(e: NotationError) -> Self {
        ConsoleError::Notation(e)
    }
}

impl From<ShiftError> for ConsoleError {
    fn from(e: ShiftError) -> Self {
        ConsoleError::Shift(e)
    }
}

impl From<SquareError> for ConsoleError {
    fn from(e: SquareError) -> Self {
        ConsoleError::Square(e)
    }
}

impl From<io::Error> for ConsoleError {
    fn from(e: io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  new                      reset to the standard setup
  setup <placement> <w|b> <halfmove> <fullmove>
  move <from> <to>         commit a move (alias: shift)
  moves <square>           legal destinations of the piece on a square
  pieces <white|black>     squares occupied by a color
  history | status | turn | clocks | captured | notation | show
  set <autoshow|echo> <on|off>, options
  help, quit";

/// A board plus session options.
#[derive(Debug, Default)]
pub struct Session {
    board: Board,
    options: ConsoleOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &ConsoleOptions {
        &self.options
    }

    /// Run one command, writing its response to `out`.
    ///
    /// # Errors
    /// Returns a `ConsoleError` if the command is rejected or output fails.
    pub fn execute(
        &mut self,
        cmd: ConsoleCommand,
        out: &mut impl Write,
    ) -> Result<Flow, ConsoleError> {
        match cmd {
            ConsoleCommand::New => {
                self.board.reset(START_NOTATION)?;
                writeln!(out, "ok")?;
            }
            ConsoleCommand::Setup(setup) => {
                self.board.reset(&setup)?;
                writeln!(out, "ok")?;
            }
            ConsoleCommand::Move { from, to } => {
                let status = self.board.shift_labels(&from, &to)?;
                if let Some(last) = self.board.history().last() {
                    writeln!(out, "{last} {}", describe_status(&self.board, status))?;
                }
                if self.options.autoshow {
                    writeln!(out, "{}", self.board)?;
                }
            }
            ConsoleCommand::Moves(label) => {
                let sq: Square = label.parse()?;
                writeln!(out, "{}", self.board.legal_moves(sq))?;
            }
            ConsoleCommand::Pieces(name) => {
                let color = parse_color(&name)?;
                writeln!(out, "{}", self.board.occupied(color))?;
            }
            ConsoleCommand::History => {
                writeln!(out, "{}", self.board.history_tokens().join(" "))?;
            }
            ConsoleCommand::Status => {
                let status = self.board.status();
                writeln!(out, "{}", describe_status(&self.board, status))?;
            }
            ConsoleCommand::Turn => {
                writeln!(out, "{}", self.board.side_to_move())?;
            }
            ConsoleCommand::Clocks => {
                writeln!(
                    out,
                    "halfmove {} fullmove {}",
                    self.board.halfmove_clock(),
                    self.board.fullmove_number()
                )?;
            }
            ConsoleCommand::Captured => {
                for color in Color::BOTH {
                    let taken: Vec<String> = self
                        .board
                        .captured_by(color)
                        .iter()
                        .map(|piece| piece.to_notation_char().to_string())
                        .collect();
                    writeln!(out, "{color}: {}", taken.join(" "))?;
                }
            }
            ConsoleCommand::Notation => {
                writeln!(out, "{}", self.board.to_notation())?;
            }
            ConsoleCommand::Show => {
                writeln!(out, "{}", self.board)?;
            }
            ConsoleCommand::Set { name, value } => {
                self.options.apply_set(&name, value.as_deref())?;
                writeln!(out, "ok")?;
            }
            ConsoleCommand::Options => self.options.print(out)?,
            ConsoleCommand::Help => writeln!(out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
            ConsoleCommand::Unknown(line) => return Err(ConsoleError::UnknownCommand(line)),
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until it ends or `quit` is seen.
    ///
    /// # Errors
    /// Only I/O failures end the session with an error.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_console_command(&line) else {
                continue;
            };
            if self.options.echo {
                writeln!(out, "> {}", line.trim())?;
            }
            debug!("console command: {cmd:?}");
            match self.execute(cmd, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ConsoleError::Io(e)) => return Err(e),
                Err(e) => writeln!(out, "error: {e}")?,
            }
            out.flush()?;
        }
        Ok(())
    }
}

fn parse_color(name: &str) -> Result<Color, ConsoleError> {
    match name.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(ConsoleError::UnknownColor(name.to_string())),
    }
}

fn describe_status(board: &Board, status: GameStatus) -> String {
    let side = board.side_to_move();
    match status {
        GameStatus::Ongoing => format!("{side} to move"),
        GameStatus::Check => format!("{side} to move, check"),
        GameStatus::CheckMate => format!("checkmate, {} wins", side.opponent()),
        GameStatus::Draw => "stalemate, draw".to_string(),
    }
}

/// Run a session on stdin/stdout.
///
/// # Errors
/// Returns any I/O error from the terminal.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Session::new().run(stdin.lock(), &mut out)
}
