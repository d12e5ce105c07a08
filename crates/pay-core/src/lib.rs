//! # pay-core
//!
//! Core types and traits for the gateway-select payment chooser.
//!
//! This crate provides:
//! - `PaymentStrategy` trait for implementing payment gateways
//! - `StrategyRegistry` and `SelectionIndex` for picking one by number
//! - `Amount` and `Currency` for the entered payment amount
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Amount, Currency, SelectionIndex, StrategyRegistry};
//!
//! let registry = StrategyRegistry::new().with_strategy(gateway);
//!
//! let index = SelectionIndex::parse("1", registry.len()).unwrap();
//! let amount = Amount::parse("42.50", Currency::USD).unwrap();
//!
//! let outcome = registry.select(index)?.process_payment(&amount);
//! ```

pub mod amount;
pub mod error;
pub mod strategy;

// Re-exports for convenience
pub use amount::{Amount, Currency};
pub use error::{PaymentError, PaymentResult};
pub use strategy::{
    BoxedPaymentStrategy, PaymentOutcome, PaymentStatus, PaymentStrategy, SelectionIndex,
    StrategyRegistry,
};
