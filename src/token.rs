//! Токенизатор строки калькулятора.
//!
//! Строка делится строго по одиночным пробелам: два пробела подряд дают
//! пустой токен, а не один разделитель.
//!
//! # Пример
//!
//! ```
//! use roman_calculator::token::{NumeralSystem, Tokenizer};
//!
//! let tokens: Vec<&str> = Tokenizer::new("IV * II").map(|st| st.text).collect();
//! assert_eq!(tokens, ["IV", "*", "II"]);
//! assert_eq!(NumeralSystem::detect("IV"), Some(NumeralSystem::Roman));
//! ```

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

static ARABIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(10|[1-9])$").expect("valid arabic pattern"));

static ROMAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(X|IX|IV|VI{0,3}|I{1,3})$").expect("valid roman pattern")
});

static OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*/+-]$").expect("valid operator pattern"));

/// Фрагмент строки с позицией начала (в байтах).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SpannedToken<'a> {
    /// Текст токена без разделителей.
    pub text: &'a str,
    /// Позиция начала токена.
    pub pos: usize,
}

impl<'a> SpannedToken<'a> {
    /// Создаёт новый токен с позицией.
    pub const fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }
}

/// Итератор по токенам, разделённым одиночным пробелом.
///
/// Всегда выдаёт хотя бы один токен, даже для пустой строки.
pub struct Tokenizer<'a> {
    input: Option<&'a str>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Создаёт новый токенизатор для входной строки.
    pub const fn new(input: &'a str) -> Self {
        Self {
            input: Some(input),
            pos: 0,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = SpannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input?;
        let start = self.pos;

        match input.split_once(' ') {
            Some((text, rest)) => {
                self.input = Some(rest);
                self.pos += text.len() + 1;
                Some(SpannedToken::new(text, start))
            }
            None => {
                self.input = None;
                Some(SpannedToken::new(input, start))
            }
        }
    }
}

/// Система счисления операнда.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Десятичные цифры, от `1` до `10`.
    Arabic,
    /// Римские цифры, от `I` до `X`.
    Roman,
}

impl NumeralSystem {
    /// Определяет систему счисления по тексту операнда.
    ///
    /// Возвращает `None`, если текст не является числом от 1 до 10
    /// ни в одной из систем.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        if ROMAN.is_match(text) {
            Some(Self::Roman)
        } else if ARABIC.is_match(text) {
            Some(Self::Arabic)
        } else {
            None
        }
    }

    /// `true` для римской системы.
    #[must_use]
    pub const fn is_roman(self) -> bool {
        matches!(self, Self::Roman)
    }
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => f.write_str("арабская"),
            Self::Roman => f.write_str("римская"),
        }
    }
}

/// Проверяет, что токен записывает арабский ноль.
///
/// Ноль не входит в диапазон операндов, но допускается как делитель,
/// чтобы деление на ноль сообщалось отдельной ошибкой.
#[must_use]
pub fn is_zero(text: &str) -> bool {
    text == "0"
}

/// Проверяет, что токен является одним из операторов `+`, `-`, `*`, `/`.
#[must_use]
pub fn is_operator(text: &str) -> bool {
    OPERATOR.is_match(text)
}
