//! Разобранное выражение и его вычисление.
//!
//! [`Expression`] живёт ровно одну строку ввода: создаётся парсером,
//! вычисляется через [`Expression::calculate`] и отбрасывается.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::expression::Expression;
//!
//! let e = Expression::new("III", '+', "IV", true);
//! assert_eq!(e.calculate().unwrap().to_string(), "VII");
//!
//! let e = Expression::new("7", '/', "2", false);
//! assert_eq!(e.calculate().unwrap().value, 3);
//! ```

use std::fmt::Display;

use thiserror::Error;
use tracing::debug;

use crate::roman;
use crate::token::{NumeralSystem, is_zero};

/// Ошибки при вычислении выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Разность римских чисел меньше единицы.
    #[error("результат не может быть меньше 1 для римских чисел")]
    RomanUnderflow,
    /// Деление на ноль.
    #[error("нельзя делить на 0")]
    DivisionByZero,
    /// Оператор вне набора `+ - * /`.
    #[error("неподдерживаемый оператор '{0}'")]
    UnsupportedOperator(char),
    /// Операнд не соответствует заявленной системе счисления.
    #[error("неправильный формат чисел: '{0}'")]
    InvalidNumber(String),
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление.
    Div,
}

impl BinaryOp {
    /// Применить операцию к операндам.
    ///
    /// Для римских чисел разность меньше единицы недопустима.
    /// Деление отбрасывает дробную часть.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::RomanUnderflow`] при `roman` и разности меньше 1.
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    pub const fn apply(self, left: i64, right: i64, roman: bool) -> Result<i64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => {
                let diff = left - right;
                if roman && diff < 1 {
                    Err(EvalError::RomanUnderflow)
                } else {
                    Ok(diff)
                }
            }
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl TryFrom<char> for BinaryOp {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(EvalError::UnsupportedOperator(other)),
        }
    }
}

/// Выражение вида `операнд оператор операнд`.
///
/// Операнды хранятся в исходном виде и переводятся в числа только при
/// вычислении.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Левый операнд.
    pub operand1: String,
    /// Правый операнд.
    pub operand2: String,
    /// Символ оператора.
    pub operator: char,
    /// Оба операнда записаны римскими цифрами.
    pub is_roman: bool,
}

impl Expression {
    /// Создать выражение.
    #[must_use]
    pub fn new(
        operand1: impl Into<String>,
        operator: char,
        operand2: impl Into<String>,
        is_roman: bool,
    ) -> Self {
        Self {
            operand1: operand1.into(),
            operand2: operand2.into(),
            operator,
            is_roman,
        }
    }

    /// Система счисления выражения.
    #[must_use]
    pub const fn system(&self) -> NumeralSystem {
        if self.is_roman {
            NumeralSystem::Roman
        } else {
            NumeralSystem::Arabic
        }
    }

    /// Вычислить значение выражения.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::RomanUnderflow`] если римская разность меньше 1.
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::UnsupportedOperator`] для символа вне `+ - * /`.
    /// - [`EvalError::InvalidNumber`] если операнд не записан в системе
    ///   выражения (возможно только для выражений, собранных вручную).
    pub fn calculate(&self) -> Result<Evaluation, EvalError> {
        let left = self.operand_value(&self.operand1)?;
        let right = self.operand_value(&self.operand2)?;
        let op = BinaryOp::try_from(self.operator)?;
        let value = op.apply(left, right, self.is_roman)?;

        debug!(left, right, ?op, value, "expression calculated");

        Ok(Evaluation {
            value,
            is_roman: self.is_roman,
        })
    }

    fn operand_value(&self, raw: &str) -> Result<i64, EvalError> {
        let arabic_zero = !self.is_roman && is_zero(raw);
        if !arabic_zero && NumeralSystem::detect(raw) != Some(self.system()) {
            return Err(EvalError::InvalidNumber(raw.to_owned()));
        }

        if self.is_roman {
            Ok(i64::from(roman::to_integer(raw)))
        } else {
            raw.parse()
                .map_err(|_| EvalError::InvalidNumber(raw.to_owned()))
        }
    }
}

/// Результат вычисления вместе с системой счисления для вывода.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Целочисленное значение.
    pub value: i64,
    /// Выводить римскими цифрами.
    pub is_roman: bool,
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match u32::try_from(self.value) {
            Ok(n) if self.is_roman => f.write_str(&roman::to_roman(n)),
            _ => write!(f, "{}", self.value),
        }
    }
}
