//! Настройка журнала.
//!
//! События пишутся в stderr, чтобы не смешиваться с ответами калькулятора
//! в stdout. Уровень задаётся переменной `RUST_LOG`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Фильтр, если `RUST_LOG` не задана.
pub const DEFAULT_FILTER: &str = "roman_calculator=warn";

/// Строит фильтр из `RUST_LOG` или из [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Устанавливает глобальный подписчик `tracing`.
///
/// Повторный вызов ничего не меняет.
pub fn init_logger() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logger();
        init_logger();
        tracing::debug!("logger initialised");
    }
}
