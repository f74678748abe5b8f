//! Development shell over the command layer.
//!
//! Runs one command against the configured stores and prints the JSON the
//! front end would receive.
//!
//! ```bash
//! nutrio-mobile products --search молоко --category "Молочные продукты"
//! nutrio-mobile favourites
//! nutrio-mobile toggle <PRODUCT_ID>
//! ```

use nutrio_core::ProductFilter;
use nutrio_mobile::commands::{favourites, product};
use nutrio_mobile::{init_tracing, start, ApiError};
use serde::Serialize;
use std::env;
use std::process::ExitCode;

fn print_usage() {
    println!("Nutrio development shell");
    println!();
    println!("Usage: nutrio-mobile <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  products [-s, --search <TEXT>] [-c, --category <NAME>]");
    println!("  favourites");
    println!("  toggle <PRODUCT_ID>");
    println!("  is-favourite <PRODUCT_ID>");
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// One shell invocation.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Products(Option<ProductFilter>),
    Favourites,
    Toggle(String),
    IsFavourite(String),
}

/// Parses the arguments after the program name.
///
/// Returns `None` for an unknown command or a missing product id.
fn parse_command(args: &[String]) -> Option<Command> {
    let (command, rest) = args.split_first()?;
    match command.as_str() {
        "products" => Some(Command::Products(parse_filter(rest))),
        "favourites" => Some(Command::Favourites),
        "toggle" => rest.first().cloned().map(Command::Toggle),
        "is-favourite" => rest.first().cloned().map(Command::IsFavourite),
        _ => None,
    }
}

fn parse_filter(args: &[String]) -> Option<ProductFilter> {
    let mut filter = ProductFilter::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--search" | "-s" => {
                if i + 1 < args.len() {
                    filter.search = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--category" | "-c" => {
                if i + 1 < args.len() {
                    filter.category = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if filter.search.is_none() && filter.category.is_none() {
        None
    } else {
        Some(filter)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    if matches!(
        args.first().map(String::as_str),
        Some("--help" | "-h" | "help")
    ) {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let Some(command) = parse_command(&args) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let state = match start().await {
        Ok(state) => state,
        Err(e) => {
            print_json(&e);
            return ExitCode::FAILURE;
        }
    };

    let outcome: Result<(), ApiError> = async {
        match command {
            Command::Products(filter) => {
                print_json(&product::fetch_products(&state, filter).await?)
            }
            Command::Favourites => print_json(&favourites::get_favorite_ids(&state).await?),
            Command::Toggle(id) => print_json(&favourites::toggle_favorite(&state, id).await?),
            Command::IsFavourite(id) => {
                print_json(&favourites::is_favorite(&state, id).await?)
            }
        }
        Ok(())
    }
    .await;

    state.shutdown().await;

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_json(&e);
            ExitCode::FAILURE
        }
    }
}
