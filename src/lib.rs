//! # roman_calculator
//!
//! Консольный калькулятор для двух чисел от 1 до 10.
//!
//! Поддерживает:
//! - Арабские (`1`–`10`) и римские (`I`–`X`) числа, но не вперемешку
//! - Бинарные операции: `+`, `-`, `*`, `/` (деление целочисленное)
//! - Вывод результата в той же системе счисления, что и ввод
//!
//! # Пример использования
//!
//! ```
//! use roman_calculator::evaluate;
//!
//! assert_eq!(evaluate("3 + 4").unwrap().to_string(), "7");
//! assert_eq!(evaluate("III + IV").unwrap().to_string(), "VII");
//! ```

pub mod expression;
pub mod logger;
pub mod parser;
pub mod roman;
pub mod token;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::expression::Evaluation;

/// Приглашение перед первой строкой.
pub const PROMPT: &str = "Пожалуйста, введите операцию:";

/// Приглашение после успешно вычисленной строки.
pub const NEXT_PROMPT: &str = "Пожалуйста, введите другую операцию:";

/// Общий тип ошибки калькулятора.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора строки.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления (деление на ноль, римский результат меньше 1).
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

impl CalcError {
    /// Возвращает позицию ошибки в исходной строке, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Eval(_) => None,
        }
    }
}

/// Чем закончился сеанс [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Ввод закончился, все строки вычислены.
    Completed,
    /// Сеанс прерван первой ошибкой.
    Aborted(CalcError),
}

/// Разбирает и вычисляет одну строку.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора или вычисления.
///
/// # Примеры
///
/// ```
/// use roman_calculator::evaluate;
///
/// assert_eq!(evaluate("10 / 3").unwrap().value, 3);
/// assert_eq!(evaluate("X * X").unwrap().to_string(), "C");
/// assert!(evaluate("II - IV").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<Evaluation, CalcError> {
    let expr = parser::parse(input)?;
    let result = expr.calculate()?;
    Ok(result)
}

/// Запускает интерактивный калькулятор.
///
/// Читает строки из `input` и пишет результаты в `output`. Первая ошибка
/// выводится и завершает сеанс: оставшиеся строки не читаются.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run(input: impl BufRead, mut output: impl Write) -> io::Result<Session> {
    writeln!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match evaluate(&line) {
            Ok(result) => {
                debug!(input = %line, %result, "line evaluated");
                writeln!(output, "{result}")?;
            }
            Err(e) => {
                warn!(input = %line, error = %e, "session aborted");
                write_error_with_context(&mut output, &line, &e)?;
                output.flush()?;
                return Ok(Session::Aborted(e));
            }
        }

        writeln!(output, "{NEXT_PROMPT}")?;
        output.flush()?;
    }

    Ok(Session::Completed)
}

/// Выводит ошибку с указанием позиции в исходной строке.
fn write_error_with_context(
    output: &mut impl Write,
    input: &str,
    error: &CalcError,
) -> io::Result<()> {
    if let Some(pos) = error.position() {
        // Показываем исходную строку и указатель на ошибку
        let column = input[..pos].chars().count();
        writeln!(output, "  {input}")?;
        writeln!(output, "  {}^", " ".repeat(column))?;
    }
    writeln!(output, "Ошибка: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::EvalError;
    use crate::parser::ParseError;

    fn session(input: &str) -> (Session, String) {
        let mut output = Vec::new();
        let session = run(input.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn evaluate_simple() {
        assert_eq!(evaluate("1 + 2").unwrap().value, 3);
        assert_eq!(evaluate("10 - 3").unwrap().value, 7);
        assert_eq!(evaluate("4 * 5").unwrap().value, 20);
        assert_eq!(evaluate("9 / 3").unwrap().value, 3);
    }

    #[test]
    fn evaluate_roman() {
        assert_eq!(evaluate("III + IV").unwrap().to_string(), "VII");
        assert_eq!(evaluate("IX - VIII").unwrap().to_string(), "I");
    }

    #[test]
    fn evaluate_errors() {
        assert!(matches!(evaluate("10 / 0"), Err(CalcError::Eval(EvalError::DivisionByZero))));
        assert!(matches!(evaluate("II - IV"), Err(CalcError::Eval(EvalError::RomanUnderflow))));
        assert!(matches!(evaluate("3 + III"), Err(CalcError::Parse(ParseError::MixedSystems { .. }))));
        assert!(matches!(evaluate("3 % 4"), Err(CalcError::Parse(ParseError::OperatorFormat { .. }))));
        assert!(matches!(evaluate("11 + 1"), Err(CalcError::Parse(ParseError::NumberFormat { .. }))));
        assert!(matches!(evaluate(""), Err(CalcError::Parse(ParseError::Format { .. }))));
    }

    #[test]
    fn error_has_position() {
        let err = evaluate("1 @ 2").unwrap_err();
        assert_eq!(err.position(), Some(2));

        // Ошибка вычисления не имеет позиции
        let err = evaluate("10 / 0").unwrap_err();
        assert_eq!(err.position(), None);
    }

    #[test]
    fn run_until_end_of_input() {
        let (session, output) = session("3 + 4\nIII * III\n");
        assert_eq!(session, Session::Completed);
        assert_eq!(
            output,
            format!("{PROMPT}\n7\n{NEXT_PROMPT}\nIX\n{NEXT_PROMPT}\n")
        );
    }

    #[test]
    fn run_stops_at_first_error() {
        let (session, output) = session("2 * 5\n3 + III\n1 + 1\n");
        assert_eq!(
            session,
            Session::Aborted(CalcError::Parse(ParseError::MixedSystems { pos: 4 }))
        );
        assert_eq!(
            output,
            format!(
                "{PROMPT}\n10\n{NEXT_PROMPT}\n  3 + III\n      ^\nОшибка: используются одновременно разные системы счисления\n"
            )
        );
    }

    #[test]
    fn run_eval_error_without_caret() {
        let (session, output) = session("V - X\n");
        assert_eq!(session, Session::Aborted(CalcError::Eval(EvalError::RomanUnderflow)));
        assert_eq!(
            output,
            format!("{PROMPT}\nОшибка: результат не может быть меньше 1 для римских чисел\n")
        );
    }

    #[test]
    fn run_accepts_crlf() {
        let (session, output) = session("6 / 4\r\n");
        assert_eq!(session, Session::Completed);
        assert_eq!(output, format!("{PROMPT}\n1\n{NEXT_PROMPT}\n"));
    }

    #[test]
    fn run_empty_input() {
        let (session, output) = session("");
        assert_eq!(session, Session::Completed);
        assert_eq!(output, format!("{PROMPT}\n"));
    }

    #[test]
    fn run_empty_line_is_format_error() {
        let (session, output) = session("\n3 + 4\n");
        assert_eq!(session, Session::Aborted(CalcError::Parse(ParseError::Format { count: 1 })));
        assert_eq!(output, format!("{PROMPT}\nОшибка: неверный формат\n"));
    }
}
