use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use gridsnake::config::{
    GridSize, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICKS_PER_SECOND, THEME_DEFAULT,
};
use gridsnake::game::GameState;
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::scheduler::TickClock;
use gridsnake::terminal_runtime::{self, AppTerminal, TerminalSession};

/// How long one frame waits for input before re-checking the tick clock.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(15);

#[derive(Debug, Parser)]
#[command(name = "gridsnake", about = "Grid-based terminal snake")]
struct Cli {
    /// Playfield width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = clap::value_parser!(u16).range(4..=512))]
    width: u16,

    /// Playfield height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = clap::value_parser!(u16).range(4..=512))]
    height: u16,

    /// Logical tick rate in ticks per second.
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..=60))]
    fps: u32,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    terminal_runtime::install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&cli, session.terminal_mut())
}

fn run(cli: &Cli, terminal: &mut AppTerminal) -> io::Result<()> {
    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    let mut clock = TickClock::new(
        TickClock::interval_for_rate(cli.fps),
        Instant::now(),
    );
    let mut snapshot = state.snapshot();

    loop {
        terminal.draw(|frame| renderer::render(frame, &snapshot, bounds, &THEME_DEFAULT))?;

        if let Some(game_input) = input::poll_input(INPUT_POLL_TIMEOUT)? {
            if game_input == GameInput::Quit {
                break;
            }

            // Direction requests only land in the buffer, but a restart
            // rebuilds the whole state; refresh so the overlay clears now
            // rather than on the next tick.
            state.apply_input(game_input);
            snapshot = state.snapshot();
        }

        if clock.should_tick(Instant::now()) {
            state.tick();
            snapshot = state.snapshot();
        }
    }

    Ok(())
}
