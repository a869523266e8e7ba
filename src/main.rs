use chrono::Local;
use log::{debug, warn};
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use micropuzzle::events::Channel;
use micropuzzle::game::{ProgressStore, PuzzleSession, Settings, SystemRandom};
use micropuzzle::helpers::{format_optional_time, format_time};
use micropuzzle::model::{
    Achievement, PackId, Puzzle, PuzzleKind, SessionEvent, Submission, Symbol,
};

const HELP: &str = "\
Commands:
  daily            play today's puzzle
  pack <name>      play a puzzle from the starter, intermediate or expert pack
  ready            hide the memory sequence and start answering
  hint             show a hint for the current puzzle
  skip             swap the current puzzle for another one
  back             leave the current puzzle
  packs            show pack progress
  stats            show your statistics
  achievements     list achievements
  sound            toggle the terminal bell
  help             show this help
  quit             exit
Anything else is taken as your answer. For symbol puzzles, type the option
numbers (\"3\" or \"1 4 2 2\") or the symbols themselves.";

fn init_logging() {
    if Settings::is_debug_mode() && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();
}

fn main() {
    init_logging();

    let data_dir = Settings::data_dir();
    debug!("Data directory: {}", data_dir.display());
    let mut settings = Settings::load(&data_dir);
    let sound_enabled = Rc::new(Cell::new(settings.sound_enabled));

    let (emitter, observer) = Channel::new::<SessionEvent>();
    let sound = Rc::clone(&sound_enabled);
    observer.subscribe(move |event: &SessionEvent| report_event(event, sound.get()));

    let store = ProgressStore::open(&data_dir);
    let mut session = PuzzleSession::new(store, emitter, Local::now().date_naive());
    let mut random = SystemRandom::new(Settings::seed_from_env());
    debug!("Random seed: {}", random.seed);

    println!("Micro Puzzles. Current streak: {}", session.progress().current_streak);
    println!("Type \"help\" for the list of commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_prompt(&session);
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "" => (),
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "daily" => {
                let puzzle = session.start_daily(Local::now());
                show_puzzle(puzzle);
            }
            "pack" => match PackId::from_name(argument) {
                Some(pack) => match session.start_pack(pack, &mut random, Local::now()) {
                    Ok(puzzle) => show_puzzle(puzzle),
                    Err(err) => println!("{}.", err),
                },
                None => println!("Unknown pack. Choose starter, intermediate or expert."),
            },
            "ready" => match session.current_puzzle() {
                Some(puzzle) if puzzle.kind() == PuzzleKind::OrderedSequence => {
                    // Scroll the sequence out of sight
                    print!("\x1B[2J\x1B[H");
                    println!("Enter the sequence in order:");
                    print_options(&puzzle.options);
                }
                _ => println!("Nothing to get ready for."),
            },
            "hint" => match session.hint() {
                Some(hint) => println!("Hint: {}", hint),
                None => println!("No active puzzle."),
            },
            "skip" => match session.skip(&mut random, Local::now()) {
                Some(puzzle) => show_puzzle(puzzle),
                None => println!("No active puzzle."),
            },
            "back" => session.abandon(),
            "packs" => show_packs(&session),
            "stats" => show_stats(&session),
            "achievements" => show_achievements(&session),
            "sound" => {
                sound_enabled.set(settings.toggle_sound());
                if let Err(err) = settings.save(&data_dir) {
                    warn!("Cannot save settings: {}", err);
                }
                println!("Sound {}.", if settings.sound_enabled { "on" } else { "off" });
            }
            _ => {
                let submission = session
                    .current_puzzle()
                    .map(|puzzle| parse_submission(puzzle, line));
                if session.submit(submission.as_ref(), Local::now()).is_none() {
                    println!("No active puzzle. Type \"daily\" or \"pack starter\" to play.");
                }
            }
        }
    }
}

fn report_event(event: &SessionEvent, sound: bool) {
    match event {
        SessionEvent::StreakReset { previous } => {
            println!("You missed a day. Your {}-day streak was reset.", previous)
        }
        SessionEvent::AnswerRejected => {
            if sound {
                print!("\x07");
            }
            println!("Not quite. Try again!");
        }
        SessionEvent::PuzzleSolved {
            duration_ms,
            current_streak,
            total_solved,
        } => {
            if sound {
                print!("\x07");
            }
            println!(
                "Excellent! Solved in {}. Streak: {}, puzzles solved: {}.",
                format_time(*duration_ms),
                current_streak,
                total_solved
            );
        }
        SessionEvent::PuzzleStarted { .. }
        | SessionEvent::PuzzleSkipped
        | SessionEvent::HintShown => (),
    }
}

fn print_prompt(session: &PuzzleSession) {
    if let Some(ticker) = session.ticker() {
        if let Some(elapsed) = ticker.drain().last() {
            let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            print!("[{}] ", format_time(elapsed_ms));
        }
    }
    print!("> ");
    let _ = io::stdout().flush();
}

fn show_puzzle(puzzle: &Puzzle) {
    println!();
    println!("{}", puzzle.category);
    println!("{}", puzzle.prompt);
    match puzzle.kind() {
        PuzzleKind::FreeText => (),
        PuzzleKind::SingleChoice => {
            for row in puzzle.display_sequence.chunks(3) {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|symbol| {
                        if symbol.is_placeholder() {
                            "❓"
                        } else {
                            symbol.as_str()
                        }
                    })
                    .collect();
                println!("  {}", cells.join(" "));
            }
            print_options(&puzzle.options);
        }
        PuzzleKind::OrderedSequence => {
            let cells: Vec<&str> = puzzle.display_sequence.iter().map(Symbol::as_str).collect();
            println!("  {}", cells.join(" "));
            println!("Memorize it, then type \"ready\".");
        }
    }
}

fn print_options(options: &[Symbol]) {
    let numbered: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, symbol)| format!("{}:{}", i + 1, symbol))
        .collect();
    println!("Options: {}", numbered.join("  "));
}

/// Resolve option numbers to symbols; anything else is used as typed.
fn parse_submission(puzzle: &Puzzle, line: &str) -> Submission {
    let resolve = |token: &str| -> Symbol {
        token
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| puzzle.options.get(i).cloned())
            .unwrap_or_else(|| Symbol::from(token))
    };
    let tokens: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    match puzzle.kind() {
        PuzzleKind::FreeText => Submission::Text(line.to_string()),
        PuzzleKind::SingleChoice => Submission::Choice(resolve(line.trim())),
        PuzzleKind::OrderedSequence => {
            Submission::Sequence(tokens.into_iter().map(resolve).collect())
        }
    }
}

fn show_packs(session: &PuzzleSession) {
    let state = session.progress();
    for pack in PackId::all() {
        let lock = if state.is_unlocked(pack) { "" } else { " (locked)" };
        println!(
            "  {:<13}{}/{}{}",
            pack.to_string(),
            state.pack_progress.get(pack),
            pack.size(),
            lock
        );
    }
}

fn show_stats(session: &PuzzleSession) {
    let state = session.progress();
    println!("  Puzzles solved: {}", state.total_solved);
    println!("  Current streak: {}", state.current_streak);
    println!("  Best streak:    {}", state.best_streak);
    println!(
        "  Fastest time:   {}",
        format_optional_time(state.fastest_solve_ms.map(|ms| ms as f64))
    );
    println!(
        "  Average time:   {}",
        format_optional_time(state.average_solve_ms)
    );
}

fn show_achievements(session: &PuzzleSession) {
    let unlocked = session.achievements();
    for achievement in Achievement::all() {
        let mark = if unlocked.contains(&achievement) { "x" } else { " " };
        println!(
            "  [{}] {}: {}",
            mark,
            achievement.title(),
            achievement.description()
        );
    }
}
