//! foodframe — terminal host for the foodframe recommendation widget
//!
//! Each invocation is one activation of the frame: the persisted city is
//! restored from the storage file, the simulated host context is queried
//! for a detected city, then the subcommand drives the frame.
//!
//! Usage examples
//! --------------
//!
//! - Ask for Tokyo recommendations (and remember Tokyo)
//!   $ foodframe recommend Tokyo
//!
//! - Show whatever the frame restores on its own
//!   $ foodframe show
//!
//! - Try the detected-city path without touching storage
//!   $ foodframe --no-storage --username kompreni show
//!
//! - Click through a session
//!   $ foodframe interactive
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=foodframe_core=debug`).
use std::io::{self, BufRead, Write};

use clap::Parser;
use foodframe_cli::host::{PrintUrl, StaticHost};
use foodframe_cli::render::render_text;
use foodframe_cli::store::FileStore;
use foodframe_core::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod args;

use crate::args::{CliArgs, Commands};

type Frame = WidgetController<FileStore, PrintUrl>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let CliArgs {
        config,
        storage,
        no_storage,
        username,
        json,
        command,
    } = CliArgs::parse();

    let config = match config {
        Some(path) => FrameConfig::from_path(path)?,
        None => FrameConfig::default(),
    };

    let store = if no_storage {
        None
    } else {
        Some(FileStore::new(storage.unwrap_or_else(FileStore::default_path)))
    };
    let host = StaticHost::new(username);

    match command {
        Commands::Cities => {
            let table = RecommendationTable::builtin();
            for (city, list) in table.cities() {
                println!("{city} ({} recommendations)", list.len());
            }
            let stats = table.stats();
            println!("{} cities, {} recommendations", stats.cities, stats.records);
        }

        Commands::Map { city } => {
            let record = current(RecommendationTable::builtin().resolve_list(&city), 0);
            println!(
                "{}",
                map_search_url(&config.maps_search_base, &map_query(record, &city))
            );
        }

        Commands::Show => {
            let frame = activate(config, store, &host).await;
            print_view(&frame, json)?;
        }

        Commands::Recommend { city } => {
            let mut frame = activate(config, store, &host).await;
            frame.type_city(&city);
            frame.request_recommendations();
            print_view(&frame, json)?;
        }

        Commands::Interactive => {
            let mut frame = activate(config, store, &host).await;
            interactive(&mut frame, json)?;
        }
    }

    Ok(())
}

async fn activate(config: FrameConfig, store: Option<FileStore>, host: &StaticHost) -> Frame {
    if let Some(store) = &store {
        info!(path = %store.path().display(), "using storage file");
    }
    let mut frame = WidgetController::with_config(config, store, PrintUrl);
    if let Some(task) = frame.on_ready() {
        task.run(host).await;
    }
    frame
}

fn print_view(frame: &Frame, json: bool) -> anyhow::Result<()> {
    let view = frame.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

const HELP: &str = "commands: type <city> | go | next | map | detected | show | help | quit";

fn interactive(frame: &mut Frame, json: bool) -> anyhow::Result<()> {
    println!("{HELP}");
    print_view(frame, json)?;

    let stdin = io::stdin();
    loop {
        print!("frame> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command.trim() {
            "" => continue,
            "type" => frame.type_city(rest),
            "go" => {
                frame.request_recommendations();
            }
            "next" => {
                if frame.next_recommendation().is_none() {
                    println!("(disabled: no city)");
                }
            }
            "map" => {
                if frame.view_on_map().is_none() {
                    println!("(disabled: no city)");
                }
                continue;
            }
            "detected" => {
                if !frame.use_detected_city() {
                    println!("(no detected city)");
                }
            }
            "show" => {}
            "help" => {
                println!("{HELP}");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other}");
                continue;
            }
        }
        print_view(frame, json)?;
    }
    Ok(())
}
