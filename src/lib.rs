mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod theme;

use std::path::PathBuf;

pub use config::{load_generator_config, GeneratorConfig, DEFAULT_OUTPUT_PATH};
pub use error::{AppError, AppResult};
pub use storage::{read_theme, write_theme, ThemeWriter};
pub use theme::{ThemeDocument, ThemeKind, TokenColorRule, TokenSettings};

/// Builds the default theme and writes it where the config points.
pub fn run() -> AppResult<PathBuf> {
    logging::init();
    let config = load_generator_config();
    generate(config)
}

pub fn generate(config: GeneratorConfig) -> AppResult<PathBuf> {
    let document = theme::apathy::document();
    document.validate()?;

    let writer = ThemeWriter::new(config.output_path);
    tracing::info!(
        name = %document.name,
        path = %writer.path().display(),
        "writing theme"
    );
    writer.write(&document)?;

    tracing::info!("theme written");
    Ok(writer.path().to_path_buf())
}
