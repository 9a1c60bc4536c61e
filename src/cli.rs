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

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tnsdir",
    version,
    about = "Inspect and resolve tnsnames.ora connection directories",
    long_about = "tnsdir reads a tnsnames.ora style connection directory and resolves entry names\ninto host, port and service details. It can print driver DSNs and connection URLs\nand check whether listeners accept TCP connections.",
    after_help = "EXAMPLES:\n  List all entries:          tnsdir list\n  Use a specific file:       tnsdir -f ./tnsnames.ora list\n  Show one entry as JSON:    tnsdir show testdb --json\n  Print a DSN:               tnsdir dsn testdb\n  Print a connection URL:    ORACLE_USERNAME=scott ORACLE_PASSWORD=tiger tnsdir url testdb\n  Check listeners:           tnsdir ping testdb proddb --timeout 3\n\nWithout -f the file is taken from TNS_NAMES_PATH, then $TNS_ADMIN/tnsnames.ora,\nthen $ORACLE_HOME/network/admin/tnsnames.ora."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'f',
        long,
        help = "Connection directory file path\nOverrides TNS_NAMES_PATH, TNS_ADMIN and ORACLE_HOME"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "List all connection entries")]
    List,

    #[command(about = "Show every field of one entry")]
    Show {
        #[arg(help = "Entry name (case-insensitive)")]
        name: String,

        #[arg(long, help = "Print the entry as JSON")]
        json: bool,
    },

    #[command(about = "Print the driver DSN for an entry")]
    Dsn {
        #[arg(help = "Entry name (case-insensitive)")]
        name: String,
    },

    #[command(
        about = "Print the connection URL for an entry",
        long_about = "Prints an oracle+oracledb:// URL for the entry using ORACLE_USERNAME and\nORACLE_PASSWORD from the environment. The password is printed in clear text."
    )]
    Url {
        #[arg(help = "Entry name (case-insensitive)")]
        name: String,
    },

    #[command(
        about = "Check that listeners accept TCP connections",
        long_about = "Opens a TCP connection to each entry's host and port.\nAn entry's CONNECT_TIMEOUT takes precedence over --timeout.\n\nExit codes: 0 (all reachable), 1 (any unreachable or unknown)"
    )]
    Ping {
        #[arg(help = "Entry names to check (all entries when omitted)")]
        names: Vec<String>,

        #[arg(long, default_value = "5", help = "Connect timeout in seconds")]
        timeout: u64,
    },
}
