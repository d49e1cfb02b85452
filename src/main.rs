mod cli;
mod error;
mod read;
mod render;
mod resources;

use std::process::ExitCode;

use clap::Parser;
use lexfreq::{
    language::Language,
    pipeline::{Pipeline, RenderSink},
};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Format},
    error::Error,
    read::FileReader,
    render::{BarChart, JsonReport},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let language = Language::from_code(&cli.language)
        .ok_or_else(|| Error::InvalidLanguage(cli.language.clone()))?;

    let resources = resources::load(language);
    let pipeline = Pipeline::with_limit(resources, cli.top.get());

    let text = FileReader::new().read(&cli.file).await?;
    let ranked = pipeline.run(&text);

    match cli.format {
        Format::Text => BarChart::stdout(cli.top.get()).render(&ranked, language),
        Format::Json => JsonReport::stdout().render(&ranked, language),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::run;
    use crate::{
        cli::{Cli, Format},
        error::Error,
    };

    fn cli(language: &str, file: &str) -> Cli {
        Cli {
            file: file.into(),
            language: String::from(language),
            top: NonZeroUsize::new(5).unwrap(),
            format: Format::Text,
        }
    }

    #[tokio::test]
    async fn test_invalid_language_rejected_before_any_io() {
        // A missing file would surface as a not-found error; seeing
        // InvalidLanguage proves the selector check fires first and no
        // resources are ever loaded.
        let error = run(cli("fr", "tests/data/no-such-file.txt"))
            .await
            .unwrap_err();

        assert_eq!(error, Error::InvalidLanguage(String::from("fr")));
    }

    #[tokio::test]
    async fn test_valid_language_with_missing_file() {
        let error = run(cli("en", "tests/data/no-such-file.txt"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            Error::Core(lexfreq::error::Error::DocumentNotFound {
                id: String::from("tests/data/no-such-file.txt")
            })
        );
    }
}
