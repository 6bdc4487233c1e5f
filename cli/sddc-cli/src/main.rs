// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! sddc - command-line client for the SDDC Manager REST API

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sddc_client::SddcClient;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::{DomainCommand, HostCommand, LicenseCommand};
use config::Overrides;

#[derive(Parser)]
#[command(
    name = "sddc",
    version,
    about = "SDDC Manager REST client",
    long_about = "Validate and create workload domains, commission hosts and manage \
                  license keys through the SDDC Manager REST API"
)]
struct Cli {
    /// Named profile under the configuration directory
    #[arg(short, long, global = true, env = "SDDC_PROFILE")]
    profile: Option<String>,

    /// Profile file path (takes precedence over --profile)
    #[arg(short, long, global = true, env = "SDDC_CONFIG")]
    config: Option<PathBuf>,

    /// SDDC Manager URL, host name or IP
    #[arg(short = 'U', long, global = true, env = "SDDC_URL")]
    url: Option<String>,

    /// API username
    #[arg(short, long, global = true, env = "SDDC_USERNAME")]
    username: Option<String>,

    /// API password
    #[arg(long, global = true, env = "SDDC_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Verify the server certificate and hostname
    #[arg(
        long,
        global = true,
        env = "SDDC_VERIFY_TLS",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    verify_tls: bool,

    /// Seconds between status polls (at least 1)
    #[arg(
        long,
        global = true,
        env = "SDDC_POLL_INTERVAL",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    poll_interval: Option<u64>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and create workload domains
    Domain {
        #[command(subcommand)]
        command: DomainCommand,
    },

    /// Validate and commission hosts
    Host {
        #[command(subcommand)]
        command: HostCommand,
    },

    /// Manage license keys
    License {
        #[command(subcommand)]
        command: LicenseCommand,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            verify_tls: self.verify_tls,
            poll_interval_secs: self.poll_interval,
        }
    }

    /// Build a client from flags, environment and profile
    fn build_client(&self) -> Result<SddcClient> {
        let profile = config::load_profile(self.profile.as_deref(), self.config.as_deref())?;
        let config = config::resolve(&self.overrides(), profile)?;
        tracing::debug!(url = %config.base_url, tls = ?config.tls, "resolved configuration");
        Ok(SddcClient::new(&config)?)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,sddc_cli=debug,sddc_client=debug,sddc_tls=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = cli.build_client()?;
    match cli.command {
        Commands::Domain { command } => command.run(&client, cli.json).await,
        Commands::Host { command } => command.run(&client, cli.json).await,
        Commands::License { command } => command.run(&client, cli.json).await,
    }
}
