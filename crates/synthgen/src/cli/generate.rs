//! Generation command handler.

use super::{Cli, Commands, OutputArgs};
use synthgen::{
    AppConfig, GenerationOrchestrator, GenerationRequest, GenerationResult, OllamaClient,
    OutputFormat, render, write_output,
};
use tracing::info;

/// Runs the parsed command line.
#[tracing::instrument(skip_all)]
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?.with_model_overrides(cli.endpoint, cli.model);

    let (request, output) = match cli.command {
        Commands::Document {
            subject,
            doc_type,
            pages,
            output,
        } => (GenerationRequest::document(subject, doc_type, pages), output),
        Commands::Dataset {
            subject,
            rows,
            columns,
            output,
        } => (
            GenerationRequest::dataset(subject, rows as usize, columns as usize),
            output,
        ),
    };

    let client = OllamaClient::new(config.model().clone())?;
    info!(
        endpoint = %config.model().base_url(),
        model = %config.model().model(),
        kind = %request.kind(),
        "Generating"
    );

    let result = GenerationOrchestrator::new(&client, config.pipeline())
        .generate(&request)
        .await?;

    emit(&result, &request, &output)?;
    if output.stats {
        print_stats(&result);
    }
    Ok(())
}

fn emit(
    result: &GenerationResult,
    request: &GenerationRequest,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let format = output
        .format
        .unwrap_or_else(|| OutputFormat::default_for(request.kind()));

    match &output.output {
        Some(path) => {
            write_output(result.content(), format, path)?;
            info!(path = %path.display(), %format, "Output written");
        }
        None => print!("{}", render(result.content(), format)?),
    }
    Ok(())
}

fn print_stats(result: &GenerationResult) {
    for stats in result.unit_stats() {
        eprintln!(
            "{:<40} attempts={} succeeded={} fallback={}",
            stats.label(),
            stats.attempts(),
            stats.succeeded(),
            stats.used_fallback()
        );
    }
    eprintln!(
        "{} units, {} model calls, {} placeholder units",
        result.unit_stats().len(),
        result.total_attempts(),
        result.fallback_count()
    );
}
