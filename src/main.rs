use std::io;
use std::process::ExitCode;

use roman_calculator::{Session, logger, run};

fn main() -> ExitCode {
    logger::init_logger();

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(Session::Completed) => ExitCode::SUCCESS,
        Ok(Session::Aborted(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Ошибка ввода-вывода: {e}");
            ExitCode::FAILURE
        }
    }
}
