//! Lamport / SOL conversions.

use crate::error::SolError;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a whole-unit SOL amount to lamports, rounding to the nearest
/// lamport.
///
/// Rejects NaN, infinities, negative values and amounts that do not fit in
/// a `u64`.
pub fn sol_to_lamports(sol: f64) -> Result<u64, SolError> {
    if !sol.is_finite() {
        return Err(SolError::InvalidAmount(format!("{sol} is not finite")));
    }
    if sol < 0.0 {
        return Err(SolError::InvalidAmount(format!("{sol} is negative")));
    }

    let lamports = (sol * LAMPORTS_PER_SOL as f64).round();
    if lamports >= u64::MAX as f64 {
        return Err(SolError::InvalidAmount(format!("{sol} SOL overflows u64 lamports")));
    }
    Ok(lamports as u64)
}

/// Convert lamports to whole-unit SOL.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Format a lamport amount as SOL with exactly four decimal places.
pub fn format_sol(lamports: u64) -> String {
    format!("{:.4}", lamports_to_sol(lamports))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sol_is_a_billion_lamports() {
        assert_eq!(sol_to_lamports(1.0).unwrap(), LAMPORTS_PER_SOL);
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
    }

    #[test]
    fn fractional_amounts_round_to_nearest_lamport() {
        assert_eq!(sol_to_lamports(1.5).unwrap(), 1_500_000_000);
        assert_eq!(sol_to_lamports(0.000_000_001).unwrap(), 1);
        assert_eq!(sol_to_lamports(0.1).unwrap(), 100_000_000);
    }

    #[test]
    fn rejects_non_finite_and_negative() {
        assert!(sol_to_lamports(f64::NAN).is_err());
        assert!(sol_to_lamports(f64::INFINITY).is_err());
        assert!(sol_to_lamports(-0.5).is_err());
        assert!(sol_to_lamports(1e30).is_err());
    }

    #[test]
    fn format_uses_four_decimals() {
        assert_eq!(format_sol(0), "0.0000");
        assert_eq!(format_sol(1_500_000_000), "1.5000");
        assert_eq!(format_sol(123_456_789), "0.1235");
        assert_eq!(format_sol(42 * LAMPORTS_PER_SOL), "42.0000");
    }
}
