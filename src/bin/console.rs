use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::{thread_rng, Rng};
use tracing_subscriber::EnvFilter;

use tic_tac_toe::{GameMode, GameSession, Outcome, Side, COMPUTER_SIDE};

const MIN_THINK_DELAY_MS: u64 = 500;
const MAX_THINK_DELAY_MS: u64 = 1500;

#[derive(Parser)]
#[command(name = "tic_tac_toe_console")]
struct Args {
    /// Opponent to play against
    #[arg(long, value_enum, default_value = "computer")]
    opponent: Opponent,
    /// Pin the session RNG for reproducible computer play
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Friend,
    Computer,
}

impl From<Opponent> for GameMode {
    fn from(value: Opponent) -> Self {
        match value {
            Opponent::Friend => GameMode::LocalTwoPlayer,
            Opponent::Computer => GameMode::VsComputer,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mode = GameMode::from(args.opponent);
    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(mode, seed),
        None => GameSession::new(mode),
    };

    println!("cells are numbered 0-8, left to right, top to bottom");
    loop {
        println!("\n{}", session.board());

        match session.outcome() {
            Outcome::InProgress => {}
            outcome => {
                report_outcome(outcome, session.mode());
                print_scores(&session);
                match prompt_next_round() {
                    NextRound::Play => session.reset_round(),
                    NextRound::PlayFromZero => {
                        session.reset_scores();
                        session.reset_round();
                    }
                    NextRound::Quit => break,
                }
                continue;
            }
        }

        if session.mode() == GameMode::VsComputer && session.board().turn() == COMPUTER_SIDE {
            think();
            match session.computer_move() {
                Ok(index) => println!("computer plays cell {}", index),
                Err(err) => println!("computer can't move: {}", err),
            }
            continue;
        }

        let Some(index) = prompt_cell(session.board().turn()) else {
            break;
        };
        if let Err(err) = session.place_human(index) {
            println!("invalid move: {}", err);
        }
    }

    print_scores(&session);
}

/// Cosmetic pause before the computer replies.
fn think() {
    let delay = thread_rng().gen_range(MIN_THINK_DELAY_MS..MAX_THINK_DELAY_MS);
    thread::sleep(Duration::from_millis(delay));
}

/// Asks for a cell index until one parses. `None` on quit or closed stdin.
fn prompt_cell(side: Side) -> Option<usize> {
    let mut input = String::new();
    loop {
        print!("{} to move, cell 0-8 (q to quit): ", side);
        io::stdout().flush().ok();
        input.clear();
        if io::stdin().read_line(&mut input).ok()? == 0 {
            return None;
        }
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return None;
        }
        if let Ok(index) = trimmed.parse() {
            return Some(index);
        }
        println!("that's not a cell number, try again");
    }
}

enum NextRound {
    Play,
    PlayFromZero,
    Quit,
}

fn prompt_next_round() -> NextRound {
    let mut input = String::new();
    loop {
        print!("play again? [y]es / [r]eset scores / [q]uit: ");
        io::stdout().flush().ok();
        input.clear();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return NextRound::Quit,
            Ok(_) => {}
        }
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "" => return NextRound::Play,
            "r" | "reset" => return NextRound::PlayFromZero,
            "q" | "quit" => return NextRound::Quit,
            _ => println!("didn't catch that"),
        }
    }
}

fn report_outcome(outcome: Outcome, mode: GameMode) {
    match (outcome, mode) {
        (Outcome::Win(side), GameMode::LocalTwoPlayer) => {
            println!("player {} wins!", side);
        }
        (Outcome::Win(side), GameMode::VsComputer) => {
            if side == COMPUTER_SIDE {
                println!("the computer wins!");
            } else {
                println!("you win!");
            }
        }
        (Outcome::Tie, _) => println!("it's a tie"),
        (Outcome::InProgress, _) => {}
    }
}

fn print_scores(session: &GameSession) {
    let scores = session.scores();
    println!(
        "X: {} | O: {} | ties: {}",
        scores.wins_x(),
        scores.wins_o(),
        scores.ties()
    );
}
