//! Number formatting for order amounts

/// Formats a number in its shortest form: `453.0` -> `"453"`, `17.5` -> `"17.5"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Dollar-prefixed amount
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_amount;
/// assert_eq!(format_amount(1500.0), "$1500");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Dollar-prefixed amount followed by a currency code: `"$1817 USD"`
pub fn format_amount_with_currency(value: f64, currency: &str) -> String {
    format!("{} {}", format_amount(value), currency)
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}
