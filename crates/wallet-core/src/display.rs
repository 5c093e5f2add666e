//! Presentation helpers.

use rand::Rng;

const ADJECTIVES: [&str; 5] = ["Swift", "Bright", "Cosmic", "Digital", "Quantum"];
const NOUNS: [&str; 5] = ["Trader", "Whale", "Explorer", "Pioneer", "Builder"];

/// First `chars` and last `chars` characters of `address` around `...`.
///
/// Length is not checked: inputs shorter than `2 * chars` give overlapping
/// halves.
pub fn shorten_address(address: &str, chars: usize) -> String {
    let all: Vec<char> = address.chars().collect();
    let head: String = all.iter().take(chars).collect();
    let tail: String = all[all.len().saturating_sub(chars)..].iter().collect();
    format!("{head}...{tail}")
}

/// Lamports as SOL with four decimals.
pub fn format_amount(lamports: u64) -> String {
    chain_sol::format_sol(lamports)
}

/// Random `<Adjective><Noun><0-999>` name for the sign-up form.
/// Purely cosmetic; says nothing about whether the name is taken.
pub fn generate_display_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let number: u16 = rng.gen_range(0..1000);
    format!("{adjective}{noun}{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_keeps_both_ends() {
        assert_eq!(shorten_address("ABCDEFGHIJKL", 4), "ABCD...IJKL");
    }

    #[test]
    fn shorten_short_input_overlaps() {
        assert_eq!(shorten_address("ABC", 4), "ABC...ABC");
        assert_eq!(shorten_address("", 4), "...");
    }

    #[test]
    fn format_amount_four_decimals() {
        assert_eq!(format_amount(1_000_000_000), "1.0000");
    }

    #[test]
    fn display_name_shape() {
        for _ in 0..50 {
            let name = generate_display_name();
            let adjective = ADJECTIVES
                .iter()
                .find(|a| name.starts_with(*a))
                .expect("adjective prefix");
            let rest = &name[adjective.len()..];
            let noun = NOUNS
                .iter()
                .find(|n| rest.starts_with(*n))
                .expect("noun after adjective");
            let number: u16 = rest[noun.len()..].parse().expect("numeric suffix");
            assert!(number < 1000);
        }
    }
}
