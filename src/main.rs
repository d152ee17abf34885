//! `generate-word`: writes the sample icon and document into the current directory.

use std::path::Path;
use std::process::ExitCode;

use yuuka_docgen::{generate, logging, GenerateError, SampleConfig};

fn run() -> Result<String, GenerateError> {
    logging::init_logging("info")?;

    let config = SampleConfig::builtin()?;
    let report = generate(&config, Path::new("."))?;
    log::info!(
        "generated {} and {}",
        report.icon_path.display(),
        report.document_path.display()
    );
    Ok(config.output)
}

fn main() -> ExitCode {
    match run() {
        Ok(file_name) => {
            println!("Successfully generated {}", file_name);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
