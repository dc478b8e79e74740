//! Terminal checkers.
//!
//! Type a cell as `rc` (e.g. `21`) to select a piece, then the destination
//! cell to move it. `new`, `restart`, `help` and `quit` do what they say.

mod config;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use checkers_core::Position;
use clap::Parser;
use config::CliConfig;
use session::{ClickOutcome, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Two-player checkers in the terminal")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value_os_t = CliConfig::default_path())]
    config: PathBuf,
    /// Name of the Black player (overrides the config file)
    #[arg(long)]
    black: Option<String>,
    /// Name of the Red player (overrides the config file)
    #[arg(long)]
    red: Option<String>,
}

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Click(Position),
    NewGame,
    Restart,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "new" | "n" => Some(Command::NewGame),
            "restart" | "r" => Some(Command::Restart),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            other => other.parse().ok().map(Command::Click),
        }
    }
}

const HELP: &str = "\
Commands:
  rc        click the cell at row r, column c (e.g. 21, or 2,1)
  new       start a new game
  restart   reset the current game
  help      show this text
  quit      leave";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let black = cli.black.unwrap_or(config.players.black);
    let red = cli.red.unwrap_or(config.players.red);
    tracing::info!(%black, %red, "starting session");

    let mut session = Session::new(&black, &red);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n", HELP);
    println!("{}", session.render());
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = Command::parse(&line) else {
            println!("Unrecognised input; type 'help' for commands.");
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::NewGame => session.new_game(),
            Command::Restart => session.restart(),
            Command::Click(pos) => match session.click(pos.row, pos.col) {
                Ok(ClickOutcome::Ignored) => {
                    println!("Select one of your own pieces.");
                    continue;
                }
                Ok(ClickOutcome::Selected { moves, .. }) if moves.is_empty() => {
                    println!("That piece has no legal moves.");
                }
                Ok(ClickOutcome::Moved { mov, chain: true }) => {
                    if let Some(at) = session.selected() {
                        println!("{}: the piece on {} must jump again.", mov, at);
                    }
                }
                Ok(_) => {}
                Err(e) => println!("{}", e),
            },
        }
        println!("{}", session.render());
        if session.game().is_over() {
            println!("Type 'new' or 'restart' to play again.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("quit\n"), Some(Command::Quit));
        assert_eq!(Command::parse(" NEW "), Some(Command::NewGame));
        assert_eq!(Command::parse("r"), Some(Command::Restart));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(
            Command::parse("21"),
            Some(Command::Click(Position::new(2, 1)))
        );
        assert_eq!(
            Command::parse("5,4\n"),
            Some(Command::Click(Position::new(5, 4)))
        );
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("99"), None);
        assert_eq!(Command::parse("move"), None);
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["checkers"]);
        assert_eq!(cli.config, PathBuf::from("checkers.toml"));
        assert!(cli.black.is_none());

        let cli = Cli::parse_from(["checkers", "--black", "Bill", "-c", "x.toml"]);
        assert_eq!(cli.black.as_deref(), Some("Bill"));
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
