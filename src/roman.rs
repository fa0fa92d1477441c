use std::borrow::Cow;

static ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Display label for a 1-based code position. Falls back to the decimal form
/// outside I..X.
pub fn to_roman(position: usize) -> Cow<'static, str> {
    match position.checked_sub(1).and_then(|idx| ROMAN_NUMERALS.get(idx)) {
        Some(numeral) => Cow::Borrowed(numeral),
        None => Cow::Owned(position.to_string()),
    }
}
