//! Line-oriented checkers shell.
//!
//! Commands (one per line on stdin):
//!
//! ```text
//! press R C            pick up the piece at row R, column C
//! release R C          drop the selected piece on row R, column C
//! move R1 C1 R2 C2     press then release
//! board                print the board
//! new                  start a new game
//! quit
//! ```
//!
//! Malformed commands are ignored, the same way the engine ignores invalid
//! input. Logs go to stderr so stdout only carries board output.

use checkers_core::{GameState, PointerInput};
use std::io::{self, BufRead, Write};
use tracing::trace;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Press(i8, i8),
    Release(i8, i8),
    Move(i8, i8, i8, i8),
    Board,
    New,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (&name, args) = parts.split_first()?;
    let nums: Vec<i8> = args.iter().map(|a| a.parse().ok()).collect::<Option<_>>()?;

    match (name, nums.as_slice()) {
        ("press", &[r, c]) => Some(Command::Press(r, c)),
        ("release", &[r, c]) => Some(Command::Release(r, c)),
        ("move", &[r1, c1, r2, c2]) => Some(Command::Move(r1, c1, r2, c2)),
        ("board", []) => Some(Command::Board),
        ("new", []) => Some(Command::New),
        ("quit", []) => Some(Command::Quit),
        _ => None,
    }
}

fn print_state(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    match game.selection() {
        Some(sq) => writeln!(out, "{} to move, holding {}", game.current_player(), sq)?,
        None => writeln!(out, "{} to move", game.current_player())?,
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = GameState::new();

    print_state(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            trace!(%line, "ignoring unrecognised command");
            continue;
        };

        match command {
            Command::Press(r, c) => game.handle_press(r, c),
            Command::Release(r, c) => game.handle_release(r, c),
            Command::Move(r1, c1, r2, c2) => {
                game.handle_press(r1, c1);
                game.handle_release(r2, c2);
            }
            Command::Board => {}
            Command::New => game.reset(),
            Command::Quit => break,
        }
        print_state(&mut stdout, &game)?;
    }

    Ok(())
}
