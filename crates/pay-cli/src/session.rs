//! # Interactive Session
//!
//! Drives one payment from the option list to the result line over a
//! line-oriented input and output.
//!
//! The option prompt is repeated until a valid number is entered. The amount
//! is read exactly once: if it does not parse, the session ends without
//! touching any strategy.

use pay_core::{
    Amount, Currency, PaymentError, PaymentResult, PaymentStatus, SelectionIndex,
    StrategyRegistry,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

pub const OPTIONS_HEADER: &str = "Available Payment Options:";
pub const SELECTION_PROMPT: &str = "Select a payment option (1, 2, etc.): ";
pub const AMOUNT_PROMPT: &str = "Enter the payment amount: ";
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid amount entered.";

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A strategy was invoked and reported `status`
    Completed {
        provider: String,
        status: PaymentStatus,
    },
    /// The amount did not parse; no strategy was invoked
    InvalidAmount,
}

/// One interactive payment session.
pub struct InteractionLoop<'a, R, W> {
    registry: &'a StrategyRegistry,
    currency: Currency,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> InteractionLoop<'a, R, W> {
    pub fn new(registry: &'a StrategyRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            currency: Currency::default(),
            input,
            output,
        }
    }

    /// Builder: set the currency amounts are shown in
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Run the session to completion.
    ///
    /// Errors are reserved for conditions the session cannot recover from:
    /// an empty registry, input closing before a selection, or console I/O
    /// failure. A bad amount or a declined payment is a normal outcome.
    #[instrument(skip(self), fields(options = self.registry.len(), currency = %self.currency))]
    pub fn run(&mut self) -> PaymentResult<SessionOutcome> {
        let registry = self.registry;
        registry.ensure_not_empty()?;

        self.render_options()?;

        let index = self.read_selection()?;
        let strategy = registry.select(index)?;
        info!(
            option = index.ordinal(),
            provider = strategy.name(),
            "Payment option selected"
        );

        let Some(amount) = self.read_amount()? else {
            writeln!(self.output, "{}", INVALID_AMOUNT_MESSAGE)?;
            self.output.flush()?;
            return Ok(SessionOutcome::InvalidAmount);
        };

        let outcome = strategy.process_payment(&amount);
        if !outcome.message.is_empty() {
            writeln!(self.output, "{}", outcome.message)?;
        }

        match outcome.status {
            PaymentStatus::Succeeded => {
                writeln!(self.output, "Payment via {} successful!", strategy.name())?;
                info!(provider = strategy.name(), amount = amount.value, "Payment succeeded");
            }
            PaymentStatus::Failed => {
                writeln!(self.output, "Payment via {} failed!", strategy.name())?;
                warn!(provider = strategy.name(), amount = amount.value, "Payment failed");
            }
        }
        self.output.flush()?;

        Ok(SessionOutcome::Completed {
            provider: strategy.name().to_string(),
            status: outcome.status,
        })
    }

    fn render_options(&mut self) -> PaymentResult<()> {
        writeln!(self.output, "{}", OPTIONS_HEADER)?;
        for (i, strategy) in self.registry.all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, strategy.name())?;
        }
        Ok(())
    }

    fn read_selection(&mut self) -> PaymentResult<SelectionIndex> {
        let count = self.registry.len();
        loop {
            self.prompt(SELECTION_PROMPT)?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed during option selection");
                return Err(PaymentError::InputClosed);
            };

            if let Some(index) = SelectionIndex::parse(&line, count) {
                return Ok(index);
            }
            debug!(input = line.trim(), count, "Rejected payment option");
        }
    }

    /// `None` when the line is missing or not a number
    fn read_amount(&mut self) -> PaymentResult<Option<Amount>> {
        self.prompt(AMOUNT_PROMPT)?;

        let amount = self
            .read_line()?
            .and_then(|line| Amount::parse(&line, self.currency));
        if amount.is_none() {
            warn!("Invalid payment amount entered");
        }
        Ok(amount)
    }

    fn prompt(&mut self, text: &str) -> PaymentResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line, or `None` at end of input
    fn read_line(&mut self) -> PaymentResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
