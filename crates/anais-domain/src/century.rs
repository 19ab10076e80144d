//! Century module - labels for the century a year falls in

/// Number of years covered by a century
pub const CENTURY_SPAN: i32 = 100;

/// Highest century rendered with Roman numerals
pub const LAST_ROMAN_CENTURY: i64 = 20;

const ROMAN_NUMERALS: [&str; 20] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X",
    "XI", "XII", "XIII", "XIV", "XV", "XVI", "XVII", "XVIII", "XIX", "XX",
];

/// Ordinal century of a year (1801..=1900 is the 19th century)
pub fn century_of(year: i32) -> i64 {
    (i64::from(year) - 1).div_euclid(i64::from(CENTURY_SPAN)) + 1
}

/// Portuguese label for the century a year falls in
///
/// Centuries I to XX use Roman numerals; anything outside that table is
/// written in Arabic digits.
///
/// ```
/// use anais_domain::century_label;
///
/// assert_eq!(century_label(1822), "século XIX");
/// assert_eq!(century_label(2050), "século 21");
/// ```
pub fn century_label(year: i32) -> String {
    let century = century_of(year);

    match roman_numeral(century) {
        Some(numeral) => format!("século {}", numeral),
        None => format!("século {}", century),
    }
}

fn roman_numeral(century: i64) -> Option<&'static str> {
    if !(1..=LAST_ROMAN_CENTURY).contains(&century) {
        return None;
    }
    ROMAN_NUMERALS.get(usize::try_from(century - 1).ok()?).copied()
}
