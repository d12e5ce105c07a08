//! # Payment Strategy Trait
//!
//! Core Strategy pattern trait for payment gateways, and the ordered
//! registry the interactive session picks from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── name()                                                 │
//! │  └── process_payment()                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!                  │                   │
//!          ┌───────┴───────┐   ┌───────┴───────┐
//!          │ PayPalPayment │   │ StripePayment │
//!          │    Gateway    │   │    Gateway    │
//!          └───────────────┘   └───────────────┘
//! ```
//!
//! The registry is filled once at startup and read-only afterwards. Options
//! are shown to the user in registration order, numbered from 1.

use crate::amount::Amount;
use crate::error::{PaymentError, PaymentResult};
use std::sync::Arc;
use tracing::debug;

/// Result of a single `process_payment` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Succeeded,
    Failed,
}

/// What a strategy reports back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub status: PaymentStatus,
    /// Line shown to the user while the payment is processed (may be empty)
    pub message: String,
}

impl PaymentOutcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Succeeded,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Failed,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }
}

/// Core trait for payment gateway implementations.
///
/// Each gateway implements this trait so the session can dispatch to
/// whichever one the user picks.
pub trait PaymentStrategy: Send + Sync {
    /// Display name shown in the option list and the result line.
    fn name(&self) -> &str;

    /// Process a payment of `amount`.
    ///
    /// A declined payment is a normal outcome and is reported through
    /// `PaymentStatus::Failed`, not as an error.
    fn process_payment(&self, amount: &Amount) -> PaymentOutcome;
}

/// Type alias for a shared payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// A validated, 1-based position in the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionIndex(usize);

impl SelectionIndex {
    /// Parse a line of user input against a list of `count` options.
    ///
    /// Accepts an optionally signed integer surrounded by whitespace.
    /// Returns `None` when the text is not an integer or falls outside
    /// `[1, count]`.
    pub fn parse(input: &str, count: usize) -> Option<Self> {
        let ordinal: i64 = input.trim().parse().ok()?;
        let ordinal = usize::try_from(ordinal).ok()?;
        Self::new(ordinal, count)
    }

    /// Build from a 1-based ordinal if it is within `[1, count]`
    pub fn new(ordinal: usize, count: usize) -> Option<Self> {
        (1..=count).contains(&ordinal).then_some(Self(ordinal))
    }

    /// The 1-based number the user typed
    pub fn ordinal(&self) -> usize {
        self.0
    }

    /// Zero-based position in the registry
    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

/// Ordered collection of payment strategies
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: Vec<BoxedPaymentStrategy>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a payment strategy
    pub fn register(&mut self, strategy: BoxedPaymentStrategy) {
        debug!(
            provider = strategy.name(),
            position = self.strategies.len() + 1,
            "Registered payment strategy"
        );
        self.strategies.push(strategy);
    }

    /// Register with builder pattern
    pub fn with_strategy(mut self, strategy: BoxedPaymentStrategy) -> Self {
        self.register(strategy);
        self
    }

    /// All strategies in registration order
    pub fn all(&self) -> &[BoxedPaymentStrategy] {
        &self.strategies
    }

    /// Get a strategy by zero-based position
    pub fn get(&self, position: usize) -> PaymentResult<&BoxedPaymentStrategy> {
        self.strategies
            .get(position)
            .ok_or(PaymentError::SelectionOutOfRange {
                position,
                len: self.strategies.len(),
            })
    }

    /// Get the strategy a validated selection points at
    pub fn select(&self, index: SelectionIndex) -> PaymentResult<&BoxedPaymentStrategy> {
        self.get(index.position())
    }

    /// Display names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Fails with `EmptyRegistry` when nothing was registered
    pub fn ensure_not_empty(&self) -> PaymentResult<()> {
        if self.is_empty() {
            return Err(PaymentError::EmptyRegistry);
        }
        Ok(())
    }

    /// Get number of strategies
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Currency;

    struct Named(&'static str);

    impl PaymentStrategy for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn process_payment(&self, _amount: &Amount) -> PaymentOutcome {
            PaymentOutcome::failed("")
        }
    }

    fn sample_registry() -> StrategyRegistry {
        StrategyRegistry::new()
            .with_strategy(Arc::new(Named("First")))
            .with_strategy(Arc::new(Named("Second")))
            .with_strategy(Arc::new(Named("Third")))
    }

    #[test]
    fn test_registration_order() {
        let registry = sample_registry();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["First", "Second", "Third"]);
        // Stable across calls
        assert_eq!(registry.names(), registry.names());
        assert_eq!(registry.all()[1].name(), "Second");
    }

    #[test]
    fn test_select_translates_to_zero_based() {
        let registry = sample_registry();

        let index = SelectionIndex::new(1, registry.len()).unwrap();
        assert_eq!(registry.select(index).unwrap().name(), "First");

        let index = SelectionIndex::new(3, registry.len()).unwrap();
        assert_eq!(index.position(), 2);
        assert_eq!(registry.select(index).unwrap().name(), "Third");
    }

    #[test]
    fn test_get_out_of_range() {
        let registry = sample_registry();

        let Err(err) = registry.get(3) else {
            panic!("position 3 should be out of range");
        };
        assert!(matches!(
            err,
            PaymentError::SelectionOutOfRange { position: 3, len: 3 }
        ));
    }

    #[test]
    fn test_empty_registry() {
        let registry = StrategyRegistry::new();

        assert!(registry.is_empty());
        assert!(matches!(
            registry.ensure_not_empty(),
            Err(PaymentError::EmptyRegistry)
        ));
        assert!(sample_registry().ensure_not_empty().is_ok());
    }

    #[test]
    fn test_selection_index_parse() {
        assert_eq!(SelectionIndex::parse("1", 2).map(|i| i.ordinal()), Some(1));
        assert_eq!(SelectionIndex::parse(" 2\n", 2).map(|i| i.ordinal()), Some(2));
        assert_eq!(SelectionIndex::parse("+2", 2).map(|i| i.ordinal()), Some(2));

        assert!(SelectionIndex::parse("abc", 2).is_none());
        assert!(SelectionIndex::parse("0", 2).is_none());
        assert!(SelectionIndex::parse("3", 2).is_none());
        assert!(SelectionIndex::parse("-1", 2).is_none());
        assert!(SelectionIndex::parse("1.0", 2).is_none());
        assert!(SelectionIndex::parse("", 2).is_none());
        assert!(SelectionIndex::parse("99999999999999999999", 2).is_none());
        assert!(SelectionIndex::parse("1", 0).is_none());
    }

    #[test]
    fn test_outcome() {
        let amount = Amount::new(1.0, Currency::USD);
        let outcome = Named("x").process_payment(&amount);
        assert!(!outcome.is_success());
        assert!(PaymentOutcome::succeeded("ok").is_success());
    }
}
