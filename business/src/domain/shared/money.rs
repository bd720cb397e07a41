use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

/// Renders an amount with exactly two decimal places, e.g. `"12.50"`.
///
/// bigdecimal drops the scale of zero when printing, so zero is written out.
pub fn two_places(value: &BigDecimal) -> String {
    let rounded = value.with_scale_round(2, RoundingMode::HalfUp);
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    rounded.to_string()
}

/// Formats a price for display: `R$ 12,50`.
pub fn format_price(value: &BigDecimal) -> String {
    format!("R$ {}", two_places(value).replace('.', ","))
}

/// Sums a sequence of amounts, zero when empty.
pub fn sum<'a>(values: impl IntoIterator<Item = &'a BigDecimal>) -> BigDecimal {
    values
        .into_iter()
        .fold(BigDecimal::from(0), |total, value| total + value)
}
