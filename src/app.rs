use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use eatnow::quiz::CompleteAnswers;
use eatnow::recommend::{self, RecommendClient, Recommendation, order_links};
use eatnow::{config, ui};
use std::process;
use std::sync::Arc;
use tracing::warn;

fn load_config() -> config::Config {
    config::Config::load().unwrap_or_else(|e| {
        warn!(error = %format!("{:#}", e), "using built-in config");
        config::Config::default()
    })
}

fn build_client(config: &config::Config, api_url: Option<&str>) -> Result<RecommendClient> {
    RecommendClient::new(config.client_config(api_url)).context("Failed to create HTTP client")
}

pub fn run(cli: Cli) -> Result<()> {
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Commands::Recommend { answers, json }) => {
            handle_recommend(api_url, answers.into(), json)
        }
        Some(Commands::CheckApi) => handle_check_api(api_url),
        Some(Commands::InitConfig) => handle_init_config(),
        None => {
            // Launch TUI (default behavior)
            let config = load_config();
            let client = build_client(&config, api_url)?;
            tracing::info!(base_url = client.base_url(), "launching quiz");
            ui::run_ui(&config, Arc::new(client)).context("Error running UI")
        }
    }
}

fn handle_recommend(api_url: Option<&str>, answers: CompleteAnswers, json: bool) -> Result<()> {
    let config = load_config();
    let client = build_client(&config, api_url)?;
    let rec = recommend::resolve(&client, &answers, &mut rand::thread_rng());

    if json {
        let out = serde_json::to_string_pretty(&rec).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        print_recommendation(&rec);
    }
    Ok(())
}

fn print_recommendation(rec: &Recommendation) {
    if let Some(notice) = rec.notice() {
        println!("{}", notice);
        println!();
    }

    let food = &rec.food;
    println!("You should eat... {} {}!", food.emoji, food.name);
    if let Some(description) = &food.description {
        println!("  {}", description);
    }
    if let Some(score) = rec.score_label() {
        let tags: Vec<String> = rec.shown_tags().iter().map(|t| format!("#{}", t)).collect();
        println!("  {} {}", score, tags.join(" "));
    }

    let veg = if food.is_vegetarian {
        " • 🌱 Vegetarian"
    } else {
        ""
    };
    println!("  Average price: ₹{}{}", food.avg_price, veg);

    for alt in &rec.alternatives {
        println!("  Or: {} {} ({:.0}%)", alt.food.emoji, alt.food.name, alt.score);
    }

    let links = order_links(&food.name);
    println!();
    println!("Order from:");
    println!("  Zomato: {}", links.zomato);
    println!("  Swiggy: {}", links.swiggy);
}

fn handle_check_api(api_url: Option<&str>) -> Result<()> {
    let config = load_config();
    let client = build_client(&config, api_url)?;

    match client.health() {
        Ok(health) => {
            println!("{} is up: {} ({})", client.base_url(), health.status, health.message);
            if !health.database.is_empty() {
                println!("Database: {}", health.database);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} is not reachable: {}", client.base_url(), e);
            eprintln!("The quiz will use backup recipes until it comes back.");
            process::exit(1);
        }
    }
}

fn handle_init_config() -> Result<()> {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            cfg.save().context("Failed to save default config")?;
            let path = config::Config::config_path()?;
            println!("Default config saved to {}", path.display());
        }
    }
    Ok(())
}
