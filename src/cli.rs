use clap::{Parser, Subcommand};
use eatnow::config::API_URL_ENV;
use eatnow::quiz::{Budget, CompleteAnswers, Social, Vibe};

#[derive(Parser)]
#[command(name = "eatnow")]
#[command(about = "What should I eat now? A food quiz for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Recommendation service base URL (overrides config)
    #[arg(long, global = true, env = API_URL_ENV, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for a recommendation without the quiz UI
    Recommend {
        #[command(flatten)]
        answers: AnswerArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the recommendation service is reachable
    CheckApi,

    /// Create default config file
    InitConfig,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnswerArgs {
    /// 0 (peckish) to 100 (starving)
    #[arg(long, default_value_t = 50.0, value_parser = parse_percent)]
    pub hunger: f64,

    #[arg(long, value_enum)]
    pub budget: Budget,

    /// 0 (salad) to 100 (burger)
    #[arg(long, default_value_t = 50.0, value_parser = parse_percent)]
    pub healthiness: f64,

    /// 0 (ice cold) to 100 (blazing hot)
    #[arg(long, default_value_t = 50.0, value_parser = parse_percent)]
    pub temperature: f64,

    /// 0 (no spice) to 5 (dragon fire)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub spice: u8,

    #[arg(long, value_enum)]
    pub social: Social,

    #[arg(long, value_enum)]
    pub vibe: Vibe,
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not in 0..=100", s))
    }
}

impl From<AnswerArgs> for CompleteAnswers {
    fn from(args: AnswerArgs) -> Self {
        CompleteAnswers {
            hunger: args.hunger,
            budget: args.budget,
            healthiness: args.healthiness,
            temperature: args.temperature,
            spice: args.spice,
            social: args.social,
            vibe: args.vibe,
        }
    }
}
