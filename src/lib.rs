mod cli;
pub mod output;
pub mod shell;
pub mod table;

use name_normalizer::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
