//! # PayPal Gateway
//!
//! Simulated PayPal strategy. No network calls are made; every payment is
//! accepted.

use pay_core::{Amount, PaymentOutcome, PaymentStrategy};
use tracing::{info, instrument};

/// Display name shown in the option list
pub const PAYPAL_GATEWAY_NAME: &str = "PayPalPaymentGateway";

/// PayPal payment strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPaymentGateway;

impl PayPalPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for PayPalPaymentGateway {
    fn name(&self) -> &str {
        PAYPAL_GATEWAY_NAME
    }

    #[instrument(skip(self, amount), fields(provider = "paypal", amount = %amount))]
    fn process_payment(&self, amount: &Amount) -> PaymentOutcome {
        info!("PayPal payment accepted");
        PaymentOutcome::succeeded(format!("Processing PayPal payment of {}.", amount))
    }
}
