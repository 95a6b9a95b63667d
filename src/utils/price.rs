//! Conversions between decimal price strings and integer hundredths

/// Parse a decimal price such as `44.26` into integer hundredths.
///
/// Digits past the second fractional place round the value half-up, so
/// `44.265` becomes `4427`. Signs, exponents and anything other than ASCII
/// digits around a single optional `.` are rejected, as is any value that does
/// not fit in a `u64`.
pub fn parse_price(input: &str) -> Option<u64> {
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mut hundredths: u64 = 0;
    for digit in whole.bytes() {
        hundredths = hundredths
            .checked_mul(10)?
            .checked_add(u64::from(digit - b'0'))?;
    }
    hundredths = hundredths.checked_mul(100)?;

    let mut fraction_digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = fraction_digits.next().unwrap_or(0);
    let cents = fraction_digits.next().unwrap_or(0);
    hundredths = hundredths.checked_add(tenths * 10 + cents)?;

    if fraction_digits.next().is_some_and(|digit| digit >= 5) {
        hundredths = hundredths.checked_add(1)?;
    }

    Some(hundredths)
}

/// Format integer hundredths as a fixed-point amount with two decimals
pub fn format_hundredths(total: u128) -> String {
    format!("{}.{:02}", total / 100, total % 100)
}
