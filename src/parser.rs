//! Разбор строки ввода в [`Expression`].
//!
//! # Формат
//!
//! ```text
//! line     = operand ' ' operator ' ' operand
//! operand  = "1" .. "10" | "I" .. "X"
//! operator = '+' | '-' | '*' | '/'
//! ```
//!
//! Оба операнда должны быть записаны в одной системе счисления.
//! Арабский `0` принимается только как делитель: такое выражение
//! разбирается и завершается ошибкой деления на ноль при вычислении.
//! Проверки выполняются по порядку: форма строки, операнды, совпадение
//! систем, оператор. Первая неудачная проверка возвращает ошибку.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::parser::parse;
//!
//! let expr = parse("IX - IV").unwrap();
//! assert!(expr.is_roman);
//! assert_eq!(expr.calculate().unwrap().to_string(), "V");
//! ```

use thiserror::Error;
use tracing::debug;

use crate::expression::Expression;
use crate::token::{NumeralSystem, SpannedToken, Tokenizer, is_operator, is_zero};

/// Ошибки, возникающие при разборе строки.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Строка не делится на три токена.
    #[error("неверный формат")]
    Format {
        /// Сколько токенов получилось.
        count: usize,
    },

    /// Операнд не является числом от 1 до 10.
    #[error("неправильный формат чисел")]
    NumberFormat {
        /// Текст операнда.
        token: String,
        /// Позиция операнда.
        pos: usize,
    },

    /// Операнды записаны в разных системах счисления.
    #[error("используются одновременно разные системы счисления")]
    MixedSystems {
        /// Позиция второго операнда.
        pos: usize,
    },

    /// Оператор не из набора `+ - * /`.
    #[error("неправильный оператор")]
    OperatorFormat {
        /// Текст оператора.
        token: String,
        /// Позиция оператора.
        pos: usize,
    },
}

impl ParseError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Format { .. } => None,
            Self::NumberFormat { pos, .. }
            | Self::MixedSystems { pos }
            | Self::OperatorFormat { pos, .. } => Some(*pos),
        }
    }
}

/// Определяет систему счисления операнда.
fn classify(token: SpannedToken<'_>) -> Result<NumeralSystem, ParseError> {
    NumeralSystem::detect(token.text).ok_or_else(|| ParseError::NumberFormat {
        token: token.text.to_owned(),
        pos: token.pos,
    })
}

/// Разбирает строку в выражение.
///
/// # Ошибки
///
/// - [`ParseError::Format`] если строка не делится одиночными пробелами
///   ровно на три токена.
/// - [`ParseError::NumberFormat`] если операнд не число от 1 до 10.
/// - [`ParseError::MixedSystems`] если системы счисления операндов различаются.
/// - [`ParseError::OperatorFormat`] если оператор не `+`, `-`, `*` или `/`.
///
/// # Примеры
///
/// ```
/// use roman_calculator::parser::{ParseError, parse};
///
/// assert_eq!(parse("3 + 4").unwrap().calculate().unwrap().value, 7);
/// assert!(matches!(parse("3 + III"), Err(ParseError::MixedSystems { .. })));
/// ```
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let tokens: Vec<SpannedToken<'_>> = Tokenizer::new(input).collect();
    let [left, op, right] = tokens[..] else {
        return Err(ParseError::Format {
            count: tokens.len(),
        });
    };

    let system = classify(left)?;
    let right_system = if op.text == "/" && is_zero(right.text) {
        NumeralSystem::Arabic
    } else {
        classify(right)?
    };
    if right_system != system {
        return Err(ParseError::MixedSystems { pos: right.pos });
    }

    let operator = match op.text.chars().next() {
        Some(symbol) if is_operator(op.text) => symbol,
        _ => {
            return Err(ParseError::OperatorFormat {
                token: op.text.to_owned(),
                pos: op.pos,
            });
        }
    };

    debug!(
        operand1 = left.text,
        %operator,
        operand2 = right.text,
        %system,
        "expression parsed"
    );

    Ok(Expression::new(
        left.text,
        operator,
        right.text,
        system.is_roman(),
    ))
}
