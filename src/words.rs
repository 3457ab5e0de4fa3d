//! Amount-in-words rendering for printed documents
//!
//! Indian numbering convention: Crore (10^7), Lakh (10^5), Thousand,
//! Hundred, then tens/units. Degraded input (negative, non-finite, 10
//! or more digits) yields an empty string so printing never fails; the
//! caller treats empty as "unavailable".

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Words for 0..=99; zero yields an empty string
fn two_digit_words(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10) as usize];
        let unit = (n % 10) as usize;
        if unit == 0 {
            tens.to_string()
        } else {
            format!("{} {}", tens, ONES[unit])
        }
    }
}

/// Words for 0..=999, used for the crore segment
fn three_digit_words(n: u64) -> String {
    debug_assert!(n < 1000);
    let hundred = n / 100;
    let rest = n % 100;
    let mut parts: Vec<String> = Vec::new();
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if rest > 0 {
        parts.push(two_digit_words(rest));
    }
    parts.join(" ")
}

/// English words for a whole-rupee figure in the Indian grouping
///
/// Negative, non-finite, or 10-or-more-digit input yields `""`. Zero
/// also yields `""` (no tier emits a fragment).
pub fn number_in_words(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return String::new();
    }
    // The `as` cast saturates, so an out-of-range f64 still lands in
    // the ceiling check below
    let n = value.trunc() as u64;
    if n >= 10_000_000_000 {
        return String::new();
    }

    let crore = n / 10_000_000;
    let lakh = (n / 100_000) % 100;
    let thousand = (n / 1_000) % 100;
    let hundred = (n / 100) % 10;
    let rest = n % 100;

    let mut parts: Vec<String> = Vec::new();
    if crore > 0 {
        parts.push(format!("{} Crore", three_digit_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousand)));
    }
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if rest > 0 {
        // "and" joins the hundreds fragment to the tens/units only
        // when both are present
        if hundred > 0 {
            parts.push(format!("and {}", two_digit_words(rest)));
        } else {
            parts.push(two_digit_words(rest));
        }
    }

    parts.join(" ")
}

/// Rupee-and-paise words line for a printed document
///
/// `None` for a zero amount (the caller omits the words line).
/// Degraded input yields `Some("")`, which the caller treats as
/// "unavailable" rather than an error.
pub fn amount_in_words(amount: f64) -> Option<String> {
    if amount == 0.0 {
        return None;
    }

    let rupees = number_in_words(amount.trunc());
    if rupees.is_empty() {
        return Some(String::new());
    }

    let mut out = format!("{} Rupees", rupees);
    let paise = ((amount - amount.trunc()) * 100.0).round() as u64;
    if paise > 0 && paise < 100 {
        out.push_str(&format!(" and {} Paise", two_digit_words(paise)));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_words() {
        assert_eq!(two_digit_words(0), "");
        assert_eq!(two_digit_words(7), "Seven");
        assert_eq!(two_digit_words(13), "Thirteen");
        assert_eq!(two_digit_words(40), "Forty");
        assert_eq!(two_digit_words(56), "Fifty Six");
        assert_eq!(two_digit_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds_with_and() {
        assert_eq!(number_in_words(100.0), "One Hundred");
        assert_eq!(number_in_words(105.0), "One Hundred and Five");
        assert_eq!(number_in_words(999.0), "Nine Hundred and Ninety Nine");
    }

    #[test]
    fn test_thousand_without_hundreds_has_no_and() {
        // hundreds digit is zero, so no "and" before the tens/units
        assert_eq!(number_in_words(1034.0), "One Thousand Thirty Four");
        assert_eq!(number_in_words(50001.0), "Fifty Thousand One");
    }

    #[test]
    fn test_reference_example() {
        assert_eq!(
            number_in_words(1234.0),
            "One Thousand Two Hundred and Thirty Four"
        );
    }

    #[test]
    fn test_lakh_and_crore_tiers() {
        assert_eq!(number_in_words(100_000.0), "One Lakh");
        assert_eq!(number_in_words(10_000_000.0), "One Crore");
        assert_eq!(
            number_in_words(123_456.0),
            "One Lakh Twenty Three Thousand Four Hundred and Fifty Six"
        );
        assert_eq!(
            number_in_words(9_999_999_999.0),
            "Nine Hundred Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine"
        );
    }

    #[test]
    fn test_degraded_inputs_yield_empty() {
        assert_eq!(number_in_words(-5.0), "");
        assert_eq!(number_in_words(f64::NAN), "");
        assert_eq!(number_in_words(f64::INFINITY), "");
        // 10 digits and above are out of range
        assert_eq!(number_in_words(10_000_000_000.0), "");
        assert_eq!(number_in_words(0.0), "");
    }

    #[test]
    fn test_amount_in_words_reference() {
        assert_eq!(
            amount_in_words(1234.0).as_deref(),
            Some("One Thousand Two Hundred and Thirty Four Rupees")
        );
    }

    #[test]
    fn test_amount_in_words_zero_is_none() {
        assert_eq!(amount_in_words(0.0), None);
    }

    #[test]
    fn test_amount_in_words_negative_degrades_to_empty() {
        assert_eq!(amount_in_words(-5.0), Some(String::new()));
    }

    #[test]
    fn test_amount_in_words_with_paise() {
        assert_eq!(
            amount_in_words(1234.56).as_deref(),
            Some("One Thousand Two Hundred and Thirty Four Rupees and Fifty Six Paise")
        );
        // whole amounts carry no paise clause
        assert_eq!(
            amount_in_words(5.0).as_deref(),
            Some("Five Rupees")
        );
    }
}
