//! Преобразование между целыми числами и римской записью.
//!
//! Обе функции работают по одной таблице [`ROMAN_NUMERALS`], упорядоченной
//! по убыванию значения. Проверка корректности римского числа здесь не
//! выполняется: это задача [`crate::token`].
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::roman::{to_integer, to_roman};
//!
//! assert_eq!(to_roman(9), "IX");
//! assert_eq!(to_integer("VII"), 7);
//! ```

/// Базовые римские цифры, включая вычитательные пары, по убыванию значения.
pub const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Переводит римское число в целое.
///
/// Вход должен быть уже проверен. Символы, не совпавшие ни с одной
/// записью таблицы, в сумму не попадают.
#[must_use]
pub fn to_integer(roman: &str) -> u32 {
    let mut rest = roman;
    let mut total = 0;

    for (value, symbol) in ROMAN_NUMERALS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += value;
            rest = tail;
        }
    }

    total
}

/// Записывает целое число римскими цифрами.
///
/// Для нуля возвращает пустую строку.
#[must_use]
pub fn to_roman(mut n: u32) -> String {
    let mut result = String::new();

    for (value, symbol) in ROMAN_NUMERALS {
        while n >= value {
            result.push_str(symbol);
            n -= value;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TO_TEN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

    #[test]
    fn renders_one_to_ten() {
        for (n, expected) in (1..=10).zip(ONE_TO_TEN) {
            assert_eq!(to_roman(n), expected, "n = {n}");
        }
    }

    #[test]
    fn parses_one_to_ten() {
        for (expected, roman) in (1..=10).zip(ONE_TO_TEN) {
            assert_eq!(to_integer(roman), expected, "ввод: '{roman}'");
        }
    }

    #[test]
    fn round_trip_one_to_ten() {
        for n in 1..=10 {
            assert_eq!(to_integer(&to_roman(n)), n);
        }
    }

    #[test]
    fn small_values_use_only_ivx() {
        for n in 1..=10 {
            assert!(to_roman(n).chars().all(|c| matches!(c, 'I' | 'V' | 'X')));
        }
    }

    #[test]
    fn renders_results_above_ten() {
        assert_eq!(to_roman(20), "XX");
        assert_eq!(to_roman(49), "XLIX");
        assert_eq!(to_roman(90), "XC");
        assert_eq!(to_roman(100), "C");
        assert_eq!(to_roman(1994), "MCMXCIV");
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_integer(""), 0);
    }

    #[test]
    fn table_is_descending() {
        assert!(ROMAN_NUMERALS.windows(2).all(|w| w[0].0 > w[1].0));
    }
}
