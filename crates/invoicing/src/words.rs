//! Amount in words, using the Indian numbering system (lakh, crore).

use gstinvoice_core::{DomainError, DomainResult};

/// Largest rupee value the converter spells out.
pub const MAX_WORDS_VALUE: u64 = 999_999_999;

/// Sentinel returned for values above [`MAX_WORDS_VALUE`].
pub const OVERFLOW: &str = "Overflow";

const ZERO: &str = "Zero";

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Words for 0..=99; zero is empty.
fn two_digit_words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=19 => ONES[n as usize].to_string(),
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                units => format!("{tens} {}", ONES[units as usize]),
            }
        }
    }
}

/// Spell out a whole number of rupees.
///
/// Groups, most significant first: crore (2 digits), lakh (2), thousand (2),
/// hundred (1), remainder (2). Zero groups are skipped and the last non-zero
/// group is joined with "and" when anything precedes it.
///
/// Returns `"Zero"` for 0 and [`OVERFLOW`] above [`MAX_WORDS_VALUE`].
pub fn number_to_words(num: u64) -> String {
    if num == 0 {
        return ZERO.to_string();
    }
    if num > MAX_WORDS_VALUE {
        return OVERFLOW.to_string();
    }

    let groups = [
        (num / 10_000_000, Some("Crore")),
        (num / 100_000 % 100, Some("Lakh")),
        (num / 1_000 % 100, Some("Thousand")),
        (num / 100 % 10, Some("Hundred")),
        (num % 100, None),
    ];

    let mut phrases: Vec<String> = groups
        .iter()
        .filter(|(value, _)| *value != 0)
        .map(|&(value, place)| match place {
            Some(place) => format!("{} {place}", two_digit_words(value)),
            None => two_digit_words(value),
        })
        .collect();

    match phrases.pop() {
        Some(last) if phrases.is_empty() => last,
        Some(last) => format!("{} and {last}", phrases.join(" ")),
        None => String::new(),
    }
}

/// Grand total rendered in words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInWords {
    /// `"<rupees> Rupees[ and <paise> Paise]"`.
    Words(String),
    /// The rupee part exceeds [`MAX_WORDS_VALUE`].
    Overflow,
}

impl AmountInWords {
    pub fn as_str(&self) -> &str {
        match self {
            AmountInWords::Words(words) => words,
            AmountInWords::Overflow => OVERFLOW,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, AmountInWords::Overflow)
    }
}

impl core::fmt::Display for AmountInWords {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split an amount into whole rupees and paise, rounding paise half-up.
///
/// 0.999 Rupees becomes (1, 0), never (0, 100).
fn split_rupees_paise(amount: f64) -> (f64, u64) {
    let total_paise = (amount * 100.0).round();
    let rupees = (total_paise / 100.0).floor();
    let paise = (total_paise - rupees * 100.0) as u64;
    (rupees, paise)
}

/// Spell out a grand total as Rupees and Paise.
///
/// Negative or non-finite amounts are rejected; a rupee part beyond
/// [`MAX_WORDS_VALUE`] yields [`AmountInWords::Overflow`].
pub fn amount_in_words(amount: f64) -> DomainResult<AmountInWords> {
    if !amount.is_finite() {
        return Err(DomainError::validation("amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(DomainError::validation(format!(
            "cannot spell a negative amount: {amount}"
        )));
    }

    let (rupees, paise) = split_rupees_paise(amount);
    if rupees > MAX_WORDS_VALUE as f64 {
        tracing::warn!(amount, "amount exceeds words range");
        return Ok(AmountInWords::Overflow);
    }

    let mut words = format!("{} Rupees", number_to_words(rupees as u64));
    if paise > 0 {
        words.push_str(&format!(" and {} Paise", number_to_words(paise)));
    }
    Ok(AmountInWords::Words(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_spelled_zero() {
        assert_eq!(number_to_words(0), "Zero");
    }

    #[test]
    fn values_past_nine_digits_overflow() {
        assert_eq!(
            number_to_words(999_999_999),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine"
        );
        assert_eq!(number_to_words(1_000_000_000), "Overflow");
        assert_eq!(number_to_words(u64::MAX), "Overflow");
    }

    #[test]
    fn two_digit_table() {
        assert_eq!(number_to_words(1), "One");
        assert_eq!(number_to_words(13), "Thirteen");
        assert_eq!(number_to_words(19), "Nineteen");
        assert_eq!(number_to_words(20), "Twenty");
        assert_eq!(number_to_words(42), "Forty Two");
        assert_eq!(number_to_words(90), "Ninety");
        assert_eq!(number_to_words(99), "Ninety Nine");
    }

    #[test]
    fn worked_examples() {
        assert_eq!(number_to_words(100), "One Hundred");
        assert_eq!(number_to_words(1500), "One Thousand and Five Hundred");
        assert_eq!(
            number_to_words(123_456_789),
            "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred and Eighty Nine"
        );
        assert_eq!(number_to_words(280), "Two Hundred and Eighty");
    }

    #[test]
    fn zero_groups_are_skipped() {
        assert_eq!(number_to_words(100_000), "One Lakh");
        assert_eq!(number_to_words(10_000_000), "One Crore");
        assert_eq!(number_to_words(10_000_005), "One Crore and Five");
        assert_eq!(number_to_words(2_005_000), "Twenty Lakh and Five Thousand");
        assert_eq!(number_to_words(1_001), "One Thousand and One");
        assert_eq!(number_to_words(110), "One Hundred and Ten");
    }

    #[test]
    fn end_to_end_example_total() {
        let words = amount_in_words(280.56).unwrap();
        assert_eq!(
            words.as_str(),
            "Two Hundred and Eighty Rupees and Fifty Six Paise"
        );
    }

    #[test]
    fn whole_amounts_omit_paise() {
        assert_eq!(amount_in_words(0.0).unwrap().as_str(), "Zero Rupees");
        assert_eq!(
            amount_in_words(1500.0).unwrap().as_str(),
            "One Thousand and Five Hundred Rupees"
        );
        assert_eq!(amount_in_words(0.001).unwrap().as_str(), "Zero Rupees");
    }

    #[test]
    fn paise_only_amount() {
        assert_eq!(
            amount_in_words(0.5).unwrap().as_str(),
            "Zero Rupees and Fifty Paise"
        );
        assert_eq!(
            amount_in_words(12.07).unwrap().as_str(),
            "Twelve Rupees and Seven Paise"
        );
    }

    #[test]
    fn paise_rounding_carries_into_rupees() {
        assert_eq!(split_rupees_paise(0.999), (1.0, 0));
        assert_eq!(split_rupees_paise(10.999), (11.0, 0));
        assert_eq!(split_rupees_paise(280.56), (280.0, 56));
        assert_eq!(amount_in_words(99.999).unwrap().as_str(), "One Hundred Rupees");
    }

    #[test]
    fn overflow_is_a_sentinel_not_an_error() {
        let words = amount_in_words(1_000_000_000.0).unwrap();
        assert!(words.is_overflow());
        assert_eq!(words.to_string(), "Overflow");

        let below = amount_in_words(999_999_999.0).unwrap();
        assert!(!below.is_overflow());
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        for bad in [-0.01, -100.0, f64::NAN, f64::INFINITY] {
            match amount_in_words(bad) {
                Err(DomainError::Validation(_)) => {}
                other => panic!("Expected validation error for {bad}, got {other:?}"),
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000,
            ..ProptestConfig::default()
        })]

        /// Property: conversion is deterministic and never leaves stray spaces.
        #[test]
        fn words_are_deterministic_and_trimmed(n in 1u64..=MAX_WORDS_VALUE) {
            let first = number_to_words(n);
            let second = number_to_words(n);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.trim(), first.as_str());
            prop_assert!(!first.contains("  "));
            prop_assert!(!first.starts_with("and"));
        }

        /// Property: paise never reach 100 and the split reassembles the amount.
        #[test]
        fn split_stays_within_half_a_paisa(amount in 0.0f64..1e8) {
            let (rupees, paise) = split_rupees_paise(amount);
            prop_assert!(paise < 100);
            let rebuilt = rupees + paise as f64 / 100.0;
            prop_assert!((rebuilt - amount).abs() <= 0.005 + 1e-6);
        }
    }
}
