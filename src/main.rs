use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connect_four::config::GameConfig;
use connect_four::game::{Cell, GameState, Phase};
use connect_four::session::{GameEvent, MatchSession};
use connect_four::store::MemoryStore;

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect4", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    let mut config = GameConfig::load_or_default(&cli.config).context("loading configuration")?;
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.validate()?;

    let mut session = MatchSession::new(config, MemoryStore::new())?;

    println!("Connect Four — players alternate entering a column number.");
    println!("Commands: q quit, r restart, s scores.");

    let stdin = io::stdin();
    loop {
        println!();
        print_board(session.game());
        match session.game().phase() {
            Phase::InProgress => {
                print!("{} > ", session.game().active_player().name())
            }
            Phase::Won(player) => print!("{} won! (r to play again) > ", player.name()),
            Phase::Tied => print!("It is a tie! (r to play again) > "),
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "q" => break,
            "r" => session.restart(),
            "s" => print_scores(&session),
            "" => {}
            _ => match input.parse::<usize>() {
                Ok(column) => match session.column_clicked(column) {
                    Ok(events) => {
                        for event in &events {
                            match *event {
                                GameEvent::MoveIgnored { column } => {
                                    println!("column {column} is full")
                                }
                                GameEvent::GameWon { player } => {
                                    println!("{} won!", player.name());
                                    print_scores(&session);
                                }
                                GameEvent::GameTied => println!("It is a tie!"),
                                GameEvent::MoveApplied { .. } => {}
                            }
                        }
                    }
                    Err(e) => println!("{e}"),
                },
                Err(_) => println!("enter a column number, or one of q/r/s"),
            },
        }
    }

    Ok(())
}

fn print_board(game: &GameState) {
    let board = game.board();
    for row in 0..board.height() {
        for col in 0..board.width() {
            let glyph = match board.get(row, col) {
                Cell::Empty => '.',
                Cell::One => 'X',
                Cell::Two => 'O',
            };
            print!(" {glyph}");
        }
        println!();
    }
    for col in 0..board.width() {
        print!(" {}", col % 10);
    }
    println!();
}

fn print_scores(session: &MatchSession<MemoryStore>) {
    let (one, two) = session.scores();
    println!(
        "Player 1: {}-{}   Player 2: {}-{}",
        one.wins, one.losses, two.wins, two.losses
    );
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
