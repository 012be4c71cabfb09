//! CLI options.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, default_value = "0", env = "HOUSE_PRICE_TRACES_SAMPLE_RATE", value_parser = parse_sample_rate)]
    pub traces_sample_rate: f32,

    #[command(flatten)]
    pub web: WebOpts,
}

/// Web application options
#[derive(Parser)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "127.0.0.1", env = "HOUSE_PRICE_HOST")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "5000", env = "HOUSE_PRICE_PORT")]
    pub port: u16,

    /// Pickled (or `.json`) regression model
    #[arg(
        long = "model",
        default_value = "model/house_price_model.pkl",
        env = "HOUSE_PRICE_MODEL"
    )]
    pub model_path: PathBuf,
}

fn parse_sample_rate(value: &str) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => Ok(rate),
        Ok(_) => Err("expected a number between 0 and 1".to_string()),
        Err(error) => Err(error.to_string()),
    }
}
