//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The loop blocks on terminal events;
//! game state only changes in response to key presses.

use std::env;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, should_quit, Cursor, KeyCommand};
use tui_tictactoe::term::{GameView, GlyphSet, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

const USAGE: &str = "\
tui-tictactoe: two-player tic-tac-toe in the terminal

USAGE:
    tui-tictactoe [--ascii]

OPTIONS:
    --ascii      draw the grid with ASCII glyphs instead of Unicode
    -h, --help   print this help

KEYS:
    1-9          play the labelled cell
    arrows/hjkl  move the cursor
    enter/space  play the cursor cell
    n            new round (keeps the score tally)
    r            reset game (zeroes the tally)
    q, ctrl-c    quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CliConfig {
    ascii: bool,
}

/// Parse command line arguments; `None` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliConfig>> {
    let mut config = CliConfig::default();
    for arg in args {
        match arg.as_str() {
            "--ascii" => config.ascii = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
    }
    Ok(Some(config))
}

fn main() -> Result<()> {
    // RUST_LOG-driven; logs go to stderr so they can be redirected while
    // the alternate screen owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args)? {
        Some(config) => config,
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: CliConfig) -> Result<()> {
    let mut game = GameState::new();
    let mut cursor = Cursor::new();
    let view = if config.ascii {
        GameView::new(GlyphSet::ascii())
    } else {
        GameView::default()
    };

    info!("session started");

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), cursor.index(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Block until the next terminal event; nothing changes between keys.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    match command {
                        KeyCommand::Select(index) => {
                            cursor.set_index(index);
                            apply(&mut game, GameAction::Place(index));
                        }
                        KeyCommand::CursorLeft => cursor.move_left(),
                        KeyCommand::CursorRight => cursor.move_right(),
                        KeyCommand::CursorUp => cursor.move_up(),
                        KeyCommand::CursorDown => cursor.move_down(),
                        KeyCommand::PlaceAtCursor => {
                            apply(&mut game, GameAction::Place(cursor.index()));
                        }
                        KeyCommand::NewRound => apply(&mut game, GameAction::NewRound),
                        KeyCommand::ResetGame => apply(&mut game, GameAction::ResetGame),
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Feed one action to the engine, logging accepted moves and finished rounds.
fn apply(game: &mut GameState, action: GameAction) {
    let accepted = game.apply_action(action);
    debug!(?action, accepted, "engine action");

    if accepted && matches!(action, GameAction::Place(_)) && game.outcome().is_terminal() {
        info!(outcome = ?game.outcome(), round = game.round_id(), "round finished");
    }
}
