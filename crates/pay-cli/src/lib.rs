//! # pay-cli
//!
//! Interactive front end for gateway-select.
//!
//! ```text
//! Available Payment Options:
//! 1. PayPalPaymentGateway
//! 2. StripePaymentGateway
//! Select a payment option (1, 2, etc.): 2
//! Enter the payment amount: 42.50
//! Processing Stripe payment of $42.50.
//! Payment via StripePaymentGateway successful!
//! ```

pub mod config;
pub mod session;

pub use config::{AppConfig, Cli, LogFormat};
pub use session::{InteractionLoop, SessionOutcome};
