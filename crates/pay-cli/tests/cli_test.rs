use assert_cmd::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn gateway_select() -> Command {
    let mut cmd = Command::new(cargo_bin!("gateway-select"));
    cmd.env_remove("RUST_LOG")
        .env_remove("PAYMENT_CURRENCY")
        .env_remove("LOG_FORMAT");
    cmd
}

#[test]
fn test_cli_stripe_payment() -> Result<(), Box<dyn std::error::Error>> {
    gateway_select()
        .write_stdin("abc\n2\n42.50\n")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Available Payment Options:\n\
             1. PayPalPaymentGateway\n\
             2. StripePaymentGateway\n\
             Select a payment option (1, 2, etc.): \
             Select a payment option (1, 2, etc.): \
             Enter the payment amount: \
             Processing Stripe payment of $42.50.\n\
             Payment via StripePaymentGateway successful!\n",
        ));

    Ok(())
}

#[test]
fn test_cli_invalid_amount_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    gateway_select()
        .write_stdin("1\nnotanumber\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Invalid amount entered.\n"))
        .stdout(predicate::str::contains("Processing").not());

    Ok(())
}

#[test]
fn test_cli_closed_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    gateway_select()
        .write_stdin("5\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Input closed before a payment option was selected",
        ));

    Ok(())
}

#[test]
fn test_cli_currency_flag() -> Result<(), Box<dyn std::error::Error>> {
    gateway_select()
        .args(["--currency", "gbp"])
        .write_stdin("1\n1500\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processing PayPal payment of £1,500.00.",
        ));

    Ok(())
}

#[test]
fn test_cli_unknown_currency() -> Result<(), Box<dyn std::error::Error>> {
    gateway_select()
        .args(["--currency", "doubloons"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported currency: doubloons"));

    Ok(())
}
