// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::time::Duration;

use tnsdir::{
    cli::{Cli, Commands},
    commands::{list::list_connections, ping::ping_connections, show::show_connection},
    manager::{ConnectionManager, ManagerConfig, ManagerError},
    utils::{expand_tilde, init_logging},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ManagerConfig::from_env();
    if let Some(file) = &cli.file {
        config.tnsnames_path = Some(expand_tilde(file));
    }
    tracing::debug!("Using configuration: {:?}", config);

    let manager = ConnectionManager::new(config);

    let success = match cli.command {
        Commands::List => {
            list_connections(manager.directory());
            true
        }
        Commands::Show { name, json } => show_connection(manager.directory(), &name, json)?,
        Commands::Dsn { name } => print_or_report(manager.dsn(&name)),
        Commands::Url { name } => {
            print_or_report(manager.connection_string(&name).map(|url| url.to_string()))
        }
        Commands::Ping { names, timeout } => {
            ping_connections(&manager, &names, Duration::from_secs(timeout)).await?
        }
    };

    if !success {
        std::process::exit(1);
    }

    Ok(())
}

fn print_or_report(result: Result<String, ManagerError>) -> bool {
    match result {
        Ok(value) => {
            println!("{value}");
            true
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            false
        }
    }
}
