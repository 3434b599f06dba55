use std::io::{self, Write};

use super::ConsoleError;

#[derive(Debug, Default)]
pub struct ConsoleOptions {
    /// Print the board diagram after every committed move
    pub autoshow: bool,
    /// Repeat each command before its output
    pub echo: bool,
}

impl ConsoleOptions {
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "option autoshow {}", on_off(self.autoshow))?;
        writeln!(out, "option echo {}", on_off(self.echo))
    }

    pub fn apply_set(&mut self, name: &str, value: Option<&str>) -> Result<(), ConsoleError> {
        let normalized = name.trim().to_ascii_lowercase();
        let slot = match normalized.as_str() {
            "autoshow" => &mut self.autoshow,
            "echo" => &mut self.echo,
            _ => return Err(ConsoleError::UnknownOption(name.to_string())),
        };
        *slot = match value.map(str::to_ascii_lowercase).as_deref() {
            Some("on" | "true" | "1") => true,
            Some("off" | "false" | "0") => false,
            _ => {
                return Err(ConsoleError::InvalidOptionValue {
                    name: normalized,
                    value: value.unwrap_or_default().to_string(),
                })
            }
        };
        Ok(())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
