//! Interactive terminal client for the stock service.
//!
//! Renders the product list with local quantities and lets the user add, edit
//! and remove products. Every change is followed by a full re-fetch.

use async_trait::async_trait;
use estoque::client::{ConfirmDelete, HttpProductApi, StockSnapshot, SyncError, Synchronizer};
use estoque::infra::{config, telemetry};
use estoque::{Product, ProductId};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const HELP: &str = "\
Commands:
  add <nome> | <descricao>         create a product
  edit <n> <nome> | <descricao>    change product n
  rm <n>                           remove product n (asks for confirmation)
  + <n> / - <n>                    change the local quantity of product n
  list                             reload from the server
  help                             show this text
  quit                             leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add { name: String, description: String },
    Edit { target: String, name: String, description: String },
    Remove { target: String },
    Increment { target: String },
    Decrement { target: String },
    List,
    Help,
    Quit,
}

fn split_fields(rest: &str) -> Option<(String, String)> {
    let (name, description) = rest.split_once('|')?;
    let (name, description) = (name.trim(), description.trim());
    if name.is_empty() || description.is_empty() {
        return None;
    }
    Some((name.to_string(), description.to_string()))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let target = || {
        if rest.is_empty() {
            Err(format!("usage: {} <n>", word))
        } else {
            Ok(rest.to_string())
        }
    };
    match word {
        "add" => split_fields(rest)
            .map(|(name, description)| Command::Add { name, description })
            .ok_or_else(|| "usage: add <nome> | <descricao> (both required)".to_string()),
        "edit" => {
            let (target, fields) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let (name, description) = split_fields(fields)
                .filter(|_| !target.is_empty())
                .ok_or_else(|| "usage: edit <n> <nome> | <descricao> (both required)".to_string())?;
            Ok(Command::Edit {
                target: target.to_string(),
                name,
                description,
            })
        }
        "rm" => target().map(|target| Command::Remove { target }),
        "+" => target().map(|target| Command::Increment { target }),
        "-" => target().map(|target| Command::Decrement { target }),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Ok(Command::Help),
        other => Err(format!("unknown command {:?} (try `help`)", other)),
    }
}

/// Accepts a 1-based list position or a literal product id.
fn resolve(snapshot: &StockSnapshot, target: &str) -> Option<ProductId> {
    if let Ok(position) = target.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| snapshot.entries.get(i))
            .map(|e| e.product.id.clone());
    }
    snapshot
        .entries
        .iter()
        .find(|e| e.product.id.as_str() == target)
        .map(|e| e.product.id.clone())
}

struct PromptConfirm<'a> {
    lines: &'a mut Lines<BufReader<Stdin>>,
}

#[async_trait]
impl<'a> ConfirmDelete for PromptConfirm<'a> {
    async fn confirm(&mut self, product: &Product) -> bool {
        prompt(&format!("Remover \"{}\"? [s/N] ", product.name));
        match self.lines.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes"),
            _ => false,
        }
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

fn report(result: Result<(), SyncError>) {
    match result {
        Ok(()) | Err(SyncError::Cancelled) => {}
        // Request failures already show up in the error banner.
        Err(SyncError::Client(_)) => {}
        Err(e) => println!("! {}", e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let sync = Synchronizer::new(HttpProductApi::new(config::api_base_url()));
    println!("> Connecting to {}", sync.api().base_url());
    report(sync.refresh().await);
    print!("{}", sync.snapshot().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(msg) => {
                println!("! {}", msg);
                continue;
            }
        };
        let snapshot = sync.snapshot().await;
        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::List => report(sync.refresh().await),
            Command::Add { name, description } => {
                report(sync.create(&name, &description).await.map(|_| ()))
            }
            Command::Edit {
                target,
                name,
                description,
            } => match resolve(&snapshot, &target) {
                Some(id) => report(sync.update(&id, &name, &description).await.map(|_| ())),
                None => println!("! no product {:?}", target),
            },
            Command::Remove { target } => match resolve(&snapshot, &target) {
                Some(id) => {
                    let mut confirm = PromptConfirm { lines: &mut lines };
                    report(sync.delete(&id, &mut confirm).await)
                }
                None => println!("! no product {:?}", target),
            },
            Command::Increment { target } => match resolve(&snapshot, &target) {
                Some(id) => {
                    sync.increment(&id).await;
                }
                None => println!("! no product {:?}", target),
            },
            Command::Decrement { target } => match resolve(&snapshot, &target) {
                Some(id) => {
                    sync.decrement(&id).await;
                }
                None => println!("! no product {:?}", target),
            },
        }
        print!("{}", sync.snapshot().await);
    }

    Ok(())
}
