//! Wordle Entropy CLI
//!
//! Loads a word list, then either ranks opening guesses, plays against a
//! known secret, or runs an interactive session fed by the player's feedback.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use wordle_entropy::{
    Dictionary, FeedbackPattern, GuessAnalysis, Word, WordleError, WordleSolver,
    DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const HELP_TEXT: &str = include_str!("text/help.txt");

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Possible secrets, one word per line (built-in list if omitted)
    #[clap(short, long, global = true)]
    words: Option<PathBuf>,

    /// Allowed guesses, one word per line (defaults to the secret list)
    #[clap(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Length of every word
    #[clap(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed when solving against a known secret
    #[clap(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the opening guesses
    Suggest {
        /// How many guesses to show
        #[clap(short, long, default_value_t = 5)]
        top: usize,
    },
    /// Play against a known secret and show every guess
    Solve { secret: String },
    /// Interactive session: enter the feedback you get for each guess
    Play,
}

fn load_words(path: Option<&PathBuf>, length: usize) -> Result<Dictionary> {
    match path {
        Some(path) => Ok(Dictionary::load(path, length)?),
        None if length == DEFAULT_WORD_LENGTH => {
            Ok(Dictionary::embedded().context("built-in word list is malformed")?)
        }
        None => bail!(
            "the built-in word list only has {}-letter words; pass --words for length {}",
            DEFAULT_WORD_LENGTH,
            length
        ),
    }
}

fn build_solver(cli: &Cli) -> Result<WordleSolver> {
    let answers = load_words(cli.words.as_ref(), cli.length)?;
    let mut solver = match &cli.guesses {
        Some(path) => {
            let guesses = Dictionary::load(path, cli.length)?;
            WordleSolver::with_guess_pool(answers, guesses)?
        }
        None => WordleSolver::new(answers),
    };
    solver.set_max_guesses(cli.max_guesses);
    log::info!(
        "{} possible secrets, {} allowed guesses",
        solver.remaining_count(),
        solver.all_words().len()
    );
    Ok(solver)
}

fn print_top(top: &[GuessAnalysis]) {
    println!();
    println!("Top {} guesses:", top.len());
    println!(
        "{:>4} {:>8} {:>8} {:>12} Possible?",
        "#", "Word", "Entropy", "Exp. Remain"
    );
    println!("{}", "-".repeat(50));
    for (i, analysis) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word.as_str().to_uppercase(),
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
    println!();
}

fn print_remaining(solver: &WordleSolver) {
    let remaining = solver.possible_answers();
    println!();
    println!("Remaining possibilities: {}", remaining.len());
    if remaining.len() <= 20 {
        for (i, word) in remaining.iter().enumerate() {
            if i > 0 && i % 10 == 0 {
                println!();
            }
            print!("{:>8}", word.as_str().to_uppercase());
        }
        println!();
    }
    println!();
}

/// What the interactive loop does after a command.
enum Step {
    Continue,
    Done,
}

fn apply_feedback(solver: &mut WordleSolver, parts: &[&str]) -> Result<Step> {
    if parts.len() < 3 {
        println!("Usage: feedback <word> <pattern>");
        println!("Example: feedback crane gybbb");
        return Ok(Step::Continue);
    }

    let word = match Word::new(parts[1]) {
        Ok(word) => word,
        Err(err) => {
            println!("{}", err);
            return Ok(Step::Continue);
        }
    };
    let pattern = match FeedbackPattern::parse(parts[2], solver.word_length()) {
        Ok(pattern) => pattern,
        Err(err) => {
            println!("{}", err);
            return Ok(Step::Continue);
        }
    };

    if let Err(err) = solver.check_guess(&word) {
        println!("{}", err);
        return Ok(Step::Continue);
    }

    if pattern.is_win() {
        println!();
        println!("🎉 Congratulations! You solved it!");
        println!();
        return Ok(Step::Done);
    }

    let prev_count = solver.remaining_count();
    match solver.apply_feedback(&word, pattern) {
        Ok(()) => {}
        Err(err @ WordleError::NoWordsPossible { .. }) => {
            println!();
            println!("⚠️  No words match this feedback pattern!");
            println!("Check the feedback you entered, or the word list may not hold the secret.");
            return Err(err.into());
        }
        Err(err) => {
            println!("{}", err);
            return Ok(Step::Continue);
        }
    }
    let new_count = solver.remaining_count();

    println!();
    println!("Guess: {}", word.as_str().to_uppercase());
    println!("Feedback: {}", pattern);
    println!(
        "Eliminated {} words ({} → {})",
        prev_count - new_count,
        prev_count,
        new_count
    );

    if new_count == 1 {
        let answers = solver.possible_answers();
        if let Some(answer) = answers.words().first() {
            println!();
            println!("The word is {}.", answer.as_str().to_uppercase());
            println!();
        }
        return Ok(Step::Done);
    }
    if new_count <= 10 {
        println!();
        println!(
            "Remaining words: {:?}",
            solver
                .possible_answers()
                .iter()
                .map(|w| w.as_str().to_uppercase())
                .collect::<Vec<_>>()
        );
    }
    println!();
    Ok(Step::Continue)
}

fn run_interactive(mut solver: WordleSolver) -> Result<()> {
    print!("{}", BANNER_TEXT);
    println!("Loaded {} words.", solver.remaining_count());
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => match solver.find_best_guess()? {
                Some(analysis) => {
                    println!();
                    println!("Best guess: {}", analysis.word.as_str().to_uppercase());
                    println!("  Entropy: {:.3} bits", analysis.entropy);
                    println!(
                        "  Expected remaining: {:.1} words",
                        analysis.expected_remaining
                    );
                    if analysis.is_possible_answer {
                        println!("  ✓ This word is a possible answer");
                    } else {
                        println!("  ✗ This word is NOT a possible answer");
                    }
                    println!();
                    println!("Remaining possibilities: {}", solver.remaining_count());
                    println!();
                }
                None => {
                    println!("The word list is empty.");
                }
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                let top = solver.find_best_guesses(n)?;
                if top.is_empty() {
                    println!("The word list is empty.");
                } else {
                    print_top(&top);
                }
            }
            "feedback" | "f" | "fb" => {
                if let Step::Done = apply_feedback(&mut solver, &parts)? {
                    break;
                }
            }
            "remaining" | "r" | "left" => print_remaining(&solver),
            "reset" => {
                solver.reset();
                println!(
                    "Reset to initial state. {} words available.",
                    solver.remaining_count()
                );
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn run_solve(mut solver: WordleSolver, secret: &str) -> Result<()> {
    let target = Word::new(secret).context("invalid secret")?;

    println!("Solving for: {}", target.as_str().to_uppercase());
    println!();

    let guesses = solver
        .solve_for_target(&target)
        .with_context(|| format!("could not solve for {}", target))?;

    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            guess.as_str().to_uppercase(),
            pattern
        );
    }

    println!();
    match guesses.last() {
        Some((_, pattern)) if pattern.is_win() => {
            println!("✓ Solved in {} guesses!", guesses.len());
        }
        _ => println!("✗ Failed to solve within {} guesses.", solver.max_guesses()),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let solver = build_solver(&cli)?;
    match cli.command {
        Some(Command::Suggest { top }) => {
            let top = solver.find_best_guesses(top)?;
            if top.is_empty() {
                bail!("no words available");
            }
            print_top(&top);
            Ok(())
        }
        Some(Command::Solve { ref secret }) => run_solve(solver, secret),
        Some(Command::Play) | None => run_interactive(solver),
    }
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<WordleError>()
            .map_or(1, WordleError::exit_code);
        process::exit(code);
    }
}
