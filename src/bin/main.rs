use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use kitchen_core::core::types::{Cookware, Outcome};
use kitchen_core::{KitchenConfig, KitchenSession};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "kitchen", about = "Cook with emojis")]
struct Cli {
    /// JSON file overriding the pantry, built-in recipes, or fallback words
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cooking delay in milliseconds (defaults to the config value)
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => KitchenConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => KitchenConfig::default(),
    };
    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.cook_delay_ms));
    let mut session = KitchenSession::new(&config);
    info!(pantry = session.pantry().len(), "kitchen open");

    let mut status = String::from("Welcome! Type 'help' for commands.");
    loop {
        print_ui(&session, &status)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        status = match command {
            "exit" | "quit" => break,
            "" => continue,
            "help" => HELP.to_string(),
            "pan" | "pot" => {
                if let Some(cookware) = Cookware::from_id(command) {
                    session.select_cookware(cookware);
                }
                format!("Using the {}.", session.selected())
            }
            "add" => add_items(&mut session, &args),
            "rm" => match parse_index(&args) {
                Some(n) => match session.remove_item(n) {
                    Ok(token) => format!("Removed {token}"),
                    Err(e) => e.to_string(),
                },
                None => "Usage: rm <n>".to_string(),
            },
            "clear" => {
                session.clear();
                format!("Emptied the {}.", session.selected())
            }
            "heat" => {
                match args.first().copied() {
                    Some("+") => session.heat_up(),
                    Some("-") => session.heat_down(),
                    Some("reset") => session.reset_heat(),
                    _ => {}
                }
                format!("Heat is {}.", session.heat())
            }
            "cook" => cook(&mut session, delay)?,
            "save" => {
                let name = args.join(" ");
                match session.save_recipe(&name) {
                    Ok(recipe) => format!("Saved {}", recipe.result),
                    Err(e) => e.to_string(),
                }
            }
            "recipes" => list_recipes(&session),
            "load" => match parse_index(&args) {
                Some(n) => match session.load_recipe(n) {
                    Ok(()) => format!("Loaded into the {}.", session.selected()),
                    Err(e) => e.to_string(),
                },
                None => "Usage: load <n>".to_string(),
            },
            "pantry" => session
                .pantry()
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            other => format!("Unknown command '{other}'. Type 'help'."),
        };
    }

    println!("\nKitchen closed.");
    Ok(())
}

const HELP: &str = "pan | pot | add <emoji>... | rm <n> | clear | heat +|-|reset | cook | save <name> | recipes | load <n> | pantry | exit";

fn parse_index(args: &[&str]) -> Option<usize> {
    args.first()?.parse::<usize>().ok()?.checked_sub(1)
}

/// Adds tokens in order, stopping at the first one the pantry rejects.
/// Tokens added before the failure stay in the cookware.
fn add_items(session: &mut KitchenSession, args: &[&str]) -> String {
    if args.is_empty() {
        return "Usage: add <emoji>...".to_string();
    }
    let mut added = Vec::new();
    for &raw in args {
        if let Err(e) = session.add_item(raw.into()) {
            return if added.is_empty() {
                e.to_string()
            } else {
                format!("Added {}, then stopped: {e}", added.join(" "))
            };
        }
        added.push(raw);
    }
    format!("Added {}", added.join(" "))
}

fn cook(session: &mut KitchenSession, delay: Duration) -> Result<String> {
    if session.active_items().is_empty() {
        return Ok("Add at least one ingredient first".to_string());
    }
    println!("\n{}", session.selected().cooking_banner().yellow());
    stdout().flush()?;
    thread::sleep(delay);

    let outcome = session.cook()?;
    let label = match outcome {
        Outcome::Matched(_) => "Recipe!",
        Outcome::Fallback(_) => "Improvised",
        Outcome::Burnt | Outcome::Undercooked => "Oops",
    };
    Ok(format!("{label} {}", outcome.dish()))
}

fn list_recipes(session: &KitchenSession) -> String {
    let lines: Vec<String> = session
        .custom_recipes()
        .enumerate()
        .map(|(i, r)| {
            let items: Vec<&str> = r.items.iter().map(|t| t.as_str()).collect();
            format!("  :{}: {} ({} • {})", i + 1, r.result, r.cookware.id(), items.join(" "))
        })
        .collect();
    if lines.is_empty() {
        "No saved recipes yet.".to_string()
    } else {
        format!("Your saved recipes:\n{}", lines.join("\n"))
    }
}

fn print_ui(session: &KitchenSession, status: &str) -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let reading = session.heat_reading();
    println!("{}", "🍳 Emoji Kitchen".bold());
    println!("---------------------------------------------------------------");
    println!(
        "Heat: {} {} {}",
        session.heat(),
        reading.band,
        reading.mood.indicator()
    );

    let items: Vec<&str> = session.active_items().iter().map(|t| t.as_str()).collect();
    let shown = if items.is_empty() { "(empty)".to_string() } else { items.join(" ") };
    println!("In the {}: {}", session.selected().id().cyan(), shown);

    if let Some(dish) = session.last_dish() {
        println!("\n  {}  (heat {} / {})", dish.to_string().bold(), session.heat(), reading.band);
    }

    println!("\n{status}");
    print!("\n> ");
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_reports_tokens_kept_before_failure() {
        let mut session = KitchenSession::default();
        let status = add_items(&mut session, &["🥚", "🍞", "🦄", "🧀"]);
        assert_eq!(status, "Added 🥚 🍞, then stopped: '🦄' is not in the pantry");
        assert_eq!(session.active_items().len(), 2);
    }

    #[test]
    fn test_add_messages() {
        let mut session = KitchenSession::default();
        assert_eq!(add_items(&mut session, &["🥚", "🧀"]), "Added 🥚 🧀");
        assert_eq!(add_items(&mut session, &["🦄"]), "'🦄' is not in the pantry");
        assert_eq!(add_items(&mut session, &[]), "Usage: add <emoji>...");
        assert_eq!(session.active_items().len(), 2);
    }

    #[test]
    fn test_parse_index_is_one_based() {
        assert_eq!(parse_index(&["1"]), Some(0));
        assert_eq!(parse_index(&["0"]), None);
        assert_eq!(parse_index(&["x"]), None);
        assert_eq!(parse_index(&[]), None);
    }
}
