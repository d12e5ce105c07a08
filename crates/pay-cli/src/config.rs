//! # Application Configuration
//!
//! Command-line flags with environment fallbacks. A `.env` file in the
//! working directory is loaded first if present.
//!
//! The list of payment options is fixed and cannot be configured.

use clap::{Parser, ValueEnum};
use pay_core::{Currency, PaymentResult};

/// Log line format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway-select")]
#[command(author, version, about = "Choose a payment gateway and process a payment", long_about = None)]
pub struct Cli {
    /// Currency used to display the payment amount (usd, eur, gbp, jpy, cad, aud, chf, mxn)
    #[arg(long, env = "PAYMENT_CURRENCY", default_value = "usd")]
    pub currency: String,

    /// Format of diagnostic log lines written to stderr
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Display currency for amounts
    pub currency: Currency,
    /// Diagnostic log format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load `.env`, then parse the process arguments
    pub fn load() -> PaymentResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_cli(&Cli::parse())
    }

    /// Validate parsed arguments
    pub fn from_cli(cli: &Cli) -> PaymentResult<Self> {
        Ok(Self {
            currency: cli.currency.parse()?,
            log_format: cli.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::PaymentError;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["gateway-select", "--currency", "gbp", "--log-format", "json"])
            .unwrap();

        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.currency, Currency::GBP);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_currency() {
        let cli = Cli {
            currency: "doubloons".to_string(),
            log_format: LogFormat::Text,
        };

        let err = AppConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, PaymentError::Configuration(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(Cli::try_parse_from(["gateway-select", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
