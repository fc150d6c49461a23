// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use indicatif::ProgressBar;
use std::{path::PathBuf, time::Duration};

use rub_rates::config::{self, Config};
use rub_rates::log::{self, LogTarget};
use rub_rates::{export, tui, Currency, RatesClient, SelectionController};

#[derive(Parser)]
#[command(name = "rub-rates", about = "Rouble exchange rates for $, € and ¥", version)]
struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the data endpoint
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the series and the average for one currency
    Show {
        /// Currency symbol ($, €, ¥) or ISO code (USD, EUR, CNY)
        #[arg(short, long, default_value = "$")]
        currency: String,

        /// Print the chart options as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Write the chart options to the output directory
        #[arg(long)]
        save: bool,
    },
    /// List the supported currencies
    Currencies,
    /// Interactive view (default)
    Tui,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    log::init(target)?;

    let config = config::load_config(cli.config.as_deref())?.with_overrides(cli.url);

    match command {
        Commands::Show {
            currency,
            json,
            save,
        } => show(&config, &currency, json, save).await?,
        Commands::Currencies => list_currencies(),
        Commands::Tui => tui::start_tui(RatesClient::new(config.data_url.clone())).await?,
    }

    Ok(())
}

async fn show(config: &Config, currency: &str, json: bool, save: bool) -> Result<()> {
    let symbol = Currency::normalize_symbol(currency);
    let mut controller = SelectionController::new(RatesClient::new(config.data_url.clone()));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading exchange rates…");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let loaded = controller.start().await.is_some();
    spinner.finish_and_clear();

    if !loaded {
        bail!("Failed to load exchange rates from {}", config.data_url);
    }

    let view = controller
        .select_currency(&symbol)
        .context("No exchange rates loaded")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view.chart)?);
    } else {
        print!("{}", export::format_view(view));
    }

    if save {
        let path = export::save_chart(view, &config.output_dir)?;
        println!("✅ Chart options written to {}", path.display());
    }

    Ok(())
}

fn list_currencies() {
    for currency in Currency::ALL {
        println!(
            "{}  {}  {}",
            currency.symbol(),
            currency.code(),
            currency.indicator()
        );
    }
}
