use crate::BeverageKind;
use std::fmt;

/// The kind of coffee shop a customer walks into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopStyle {
    Italian,
    American,
}

impl ShopStyle {
    /// Selection number that picks the Italian shop. Everything else is American.
    pub const ITALIAN_SELECTION: i64 = 1;

    /// Interprets a raw selection line.
    ///
    /// The leading integer of the input is read (leading whitespace skipped,
    /// optional sign, then digits). Only the value 1 selects `Italian`; any
    /// other number, non-numeric or empty input, or a value that does not fit
    /// falls back to `American`.
    pub fn from_selection(input: &str) -> Self {
        match leading_integer(input) {
            Some(Self::ITALIAN_SELECTION) => Self::Italian,
            _ => Self::American,
        }
    }

    /// Returns the beverage this style of shop brews.
    pub fn beverage_kind(&self) -> BeverageKind {
        match self {
            Self::Italian => BeverageKind::Espresso,
            Self::American => BeverageKind::Latte,
        }
    }
}

impl fmt::Display for ShopStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Italian => write!(f, "italian"),
            Self::American => write!(f, "american"),
        }
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_selects_italian() {
        assert_eq!(ShopStyle::from_selection("1"), ShopStyle::Italian);
        assert_eq!(ShopStyle::from_selection("1\n"), ShopStyle::Italian);
        assert_eq!(ShopStyle::from_selection("   +1 \r\n"), ShopStyle::Italian);
        assert_eq!(ShopStyle::from_selection("01"), ShopStyle::Italian);
    }

    #[test]
    fn test_leading_integer_wins_over_trailing_text() {
        assert_eq!(ShopStyle::from_selection("1 please"), ShopStyle::Italian);
        assert_eq!(ShopStyle::from_selection("12"), ShopStyle::American);
    }

    #[test]
    fn test_anything_else_selects_american() {
        for input in ["2", "0", "-1", "", "\n", "espresso", "one", "+", "99999999999999999999999"] {
            assert_eq!(
                ShopStyle::from_selection(input),
                ShopStyle::American,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_style_maps_to_beverage() {
        assert_eq!(ShopStyle::Italian.beverage_kind(), BeverageKind::Espresso);
        assert_eq!(ShopStyle::American.beverage_kind(), BeverageKind::Latte);
    }
}
