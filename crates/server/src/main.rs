// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod http;
mod routes;

#[cfg(test)]
mod tests;

use atrium_api::EventPolicy;
use atrium_persistence::{DirectorySeed, Persistence, SeedSummary, SharedPersistence};
use axum::Router;
use clap::Parser;
use tracing::info;

use crate::routes::{AppState, build_router};

/// Atrium Server - event scheduling with participant resolution
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// IANA time zone used for calendar days and `HH:mm` end times
    #[arg(short, long, default_value = "UTC")]
    timezone: String,

    /// JSON file of departments, units and users to load at start-up
    #[arg(short, long)]
    seed: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Atrium Server");

    let policy: EventPolicy = EventPolicy::from_timezone_name(&args.timezone)?;
    info!(timezone = %policy.zone(), "Using scheduling time zone");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(seed_path) = &args.seed {
        let seed: DirectorySeed = DirectorySeed::from_file(seed_path)?;
        let summary: SeedSummary = persistence.apply_seed(&seed)?;
        info!(
            seed = %seed_path,
            departments = summary.departments,
            units = summary.units,
            users = summary.users,
            "Loaded directory seed"
        );
    }

    let app_state: AppState = AppState {
        store: SharedPersistence::new(persistence),
        policy,
    };

    let app: Router = build_router(app_state);

    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
