use std::str::FromStr;

use bigdecimal::BigDecimal;
use business::domain::shared::money::two_places;

/// Amounts travel as decimal strings with two places, e.g. `"12.50"`.
pub fn to_amount(value: &BigDecimal) -> String {
    two_places(value)
}

pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_always_render_two_decimals() {
        assert_eq!(to_amount(&BigDecimal::from(25)), "25.00");
        assert_eq!(to_amount(&BigDecimal::from_str("2.5").unwrap()), "2.50");
        assert_eq!(to_amount(&BigDecimal::from_str("1.005").unwrap()), "1.01");
    }

    #[test]
    fn should_render_zero_with_two_decimals() {
        assert_eq!(to_amount(&BigDecimal::from(0)), "0.00");
        assert_eq!(to_amount(&BigDecimal::from_str("0.00").unwrap()), "0.00");
    }

    #[test]
    fn should_parse_amount_strings() {
        assert_eq!(parse_amount(" 3.00 "), Some(BigDecimal::from(3)));
        assert_eq!(parse_amount("três reais"), None);
    }
}
