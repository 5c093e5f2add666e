//! Input checks the front end runs before calling into the session.

use crate::error::WalletError;

/// Trimmed username for the create screen, or a validation error if
/// nothing is left.
pub fn validate_username(input: &str) -> Result<String, WalletError> {
    non_blank(input, "Please enter a username")
}

/// Same check for the sign-in screen, which words its prompt differently.
pub fn validate_login_username(input: &str) -> Result<String, WalletError> {
    non_blank(input, "Please enter your username")
}

fn non_blank(input: &str, prompt: &str) -> Result<String, WalletError> {
    let username = input.trim();
    if username.is_empty() {
        return Err(WalletError::Validation(prompt.into()));
    }
    Ok(username.to_string())
}

/// Check the transfer form. Returns the trimmed recipient and the amount.
pub fn parse_transfer(recipient: &str, amount: &str) -> Result<(String, f64), WalletError> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(WalletError::Validation(
            "Please enter recipient address".into(),
        ));
    }
    if !chain_sol::is_valid_address(recipient) {
        return Err(WalletError::Validation("Invalid Solana address".into()));
    }

    let amount = parse_amount(amount)
        .ok_or_else(|| WalletError::Validation("Please enter a valid amount".into()))?;

    Ok((recipient.to_string(), amount))
}

/// A finite, strictly positive number, or `None`.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
