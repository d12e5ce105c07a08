//! # pay-gateways
//!
//! Built-in payment strategies for gateway-select.
//!
//! 1. **PayPalPaymentGateway** - simulated PayPal processing
//! 2. **StripePaymentGateway** - simulated Stripe processing
//!
//! Both accept every payment. They differ only in their display name and the
//! message they report while processing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_gateways::default_registry;
//!
//! let registry = default_registry();
//! for (i, strategy) in registry.all().iter().enumerate() {
//!     println!("{}. {}", i + 1, strategy.name());
//! }
//! ```

pub mod paypal;
pub mod stripe;

// Re-exports
pub use paypal::{PayPalPaymentGateway, PAYPAL_GATEWAY_NAME};
pub use stripe::{StripePaymentGateway, STRIPE_GATEWAY_NAME};

use pay_core::{BoxedPaymentStrategy, StrategyRegistry};
use std::sync::Arc;

/// The fixed startup registry: PayPal first, then Stripe.
pub fn default_registry() -> StrategyRegistry {
    StrategyRegistry::new()
        .with_strategy(Arc::new(PayPalPaymentGateway::new()) as BoxedPaymentStrategy)
        .with_strategy(Arc::new(StripePaymentGateway::new()) as BoxedPaymentStrategy)
}
