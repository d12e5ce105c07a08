//! # Stripe Gateway
//!
//! Simulated Stripe strategy. Payments are never sent to the Stripe API.

use pay_core::{Amount, PaymentOutcome, PaymentStrategy};
use tracing::{info, instrument};

/// Display name shown in the option list
pub const STRIPE_GATEWAY_NAME: &str = "StripePaymentGateway";

/// Stripe payment strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct StripePaymentGateway;

impl StripePaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for StripePaymentGateway {
    fn name(&self) -> &str {
        STRIPE_GATEWAY_NAME
    }

    #[instrument(skip(self, amount), fields(provider = "stripe", amount = %amount))]
    fn process_payment(&self, amount: &Amount) -> PaymentOutcome {
        info!("Stripe payment accepted");
        PaymentOutcome::succeeded(format!("Processing Stripe payment of {}.", amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::Currency;

    #[test]
    fn test_stripe_always_succeeds() {
        let outcome = StripePaymentGateway::new().process_payment(&Amount::new(1999.0, Currency::EUR));

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Processing Stripe payment of €1,999.00.");
    }
}
