//! Arena CLI
//!
//! Bot-vs-bot matches, the leaderboard and player profiles.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use arena::{
    Achievement, Ledger, MatchConfig, MatchRunner, Settings, DEFAULT_CONFIG_PATH,
    DEFAULT_LEADERBOARD_LIMIT,
};
use bot::{Bot, Difficulty};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Magic Chess Arena");
    println!();
    println!("Usage:");
    println!("  arena [--config FILE] match <level1> <level2> [--games N] [--seed S] [--max-plies N]");
    println!("  arena [--config FILE] leaderboard [--limit N]");
    println!("  arena [--config FILE] profile <username>");
    println!();
    println!("Levels run from 1 to 10:");
    println!("  1-3   novice        - random legal move");
    println!("  4-7   intermediate  - random capture when one exists");
    println!("  8-10  expert        - best material after one move");
    println!();
    println!("Examples:");
    println!("  arena match 3 9 --games 20 --seed 7");
    println!("  arena leaderboard --limit 5");
}

/// Value following `flag`, parsed.
fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(i + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    raw.parse()
        .with_context(|| format!("invalid value {raw:?} for {flag}"))
}

fn parse_level(raw: &str) -> Result<Difficulty> {
    let n: u8 = raw
        .parse()
        .with_context(|| format!("level {raw:?} is not a number"))?;
    Ok(Difficulty::new(n)?)
}

fn run_match(args: &[String], settings: &Settings) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two levels");
    }

    let level1 = parse_level(&args[0])?;
    let level2 = parse_level(&args[1])?;

    // Parse optional arguments
    let mut num_games = settings.games;
    let mut max_plies = settings.max_plies;
    let mut seed = settings.seed;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                num_games = flag_value(args, i, "--games")?;
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(flag_value(args, i, "--seed")?);
                i += 1;
            }
            "--max-plies" => {
                max_plies = flag_value(args, i, "--max-plies")?;
                i += 1;
            }
            other => bail!("unknown option {other:?}"),
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", level1, level2);
    println!("Games: {}, Max plies: {}", num_games, max_plies);
    println!();

    let mut rng = Settings { seed, ..settings.clone() }.rng();
    let mut engine1 = Bot::new(level1);
    let mut engine2 = Bot::new(level2);

    let config = MatchConfig {
        num_games,
        max_plies,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2, &mut rng);

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        level1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}

fn show_leaderboard(args: &[String], settings: &Settings) -> Result<()> {
    let mut limit = DEFAULT_LEADERBOARD_LIMIT;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" | "-n" => {
                limit = flag_value(args, i, "--limit")?;
                i += 1;
            }
            other => bail!("unknown option {other:?}"),
        }
        i += 1;
    }

    let ledger = Ledger::open(&settings.store_path)
        .with_context(|| format!("opening {}", settings.store_path.display()))?;
    ledger.print_leaderboard(limit);
    Ok(())
}

fn show_profile(args: &[String], settings: &Settings) -> Result<()> {
    let Some(username) = args.first() else {
        bail!("profile requires a username");
    };
    let ledger = Ledger::open(&settings.store_path)
        .with_context(|| format!("opening {}", settings.store_path.display()))?;
    let profile = ledger.find_profile(username)?;

    println!("=== {} ===", profile.username);
    println!("Rating: {}", profile.rating);
    println!(
        "Games: {} ({} wins, {} losses, {} draws, {:.0}% won)",
        profile.total_games,
        profile.wins,
        profile.losses,
        profile.draws,
        profile.win_rate() * 100.0
    );
    println!();

    let achievements = ledger.achievements();
    let progress = achievements.progress(username);
    let unlocked = achievements.unlocked(username);
    println!("Achievements ({}/{})", unlocked.len(), Achievement::ALL.len());
    for a in Achievement::ALL {
        let mark = if unlocked.contains(&a) { "x" } else { " " };
        println!(
            "  [{}] {:<18} {:<34} {}/{}",
            mark,
            a.name(),
            a.description(),
            a.progress(&progress).min(a.requirement()),
            a.requirement()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        let path = args
            .get(pos + 1)
            .context("--config needs a file path")?
            .clone();
        config_path = PathBuf::from(path);
        args.drain(pos..pos + 2);
    }
    let settings = Settings::load_or_default(&config_path)?;

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "match" => run_match(&args[1..], &settings),
        "leaderboard" => show_leaderboard(&args[1..], &settings),
        "profile" => show_profile(&args[1..], &settings),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command {other:?}")
        }
    }
}
