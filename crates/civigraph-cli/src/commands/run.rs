//! Match command implementation.

use crate::cli::MatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use civigraph_matcher::{
    find_matcher, InMemoryCatalog, MatchProgress, MatchSettings, Orchestrator, ProgressSink,
};
use civigraph_store::SqliteStore;
use std::path::Path;

/// Execute the match command.
///
/// Runs one matcher against the configured catalog snapshot. Ctrl+C
/// cancels the run before anything is committed.
pub async fn execute_match(
    args: MatchArgs,
    store: &mut SqliteStore,
    catalog_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let matcher = find_matcher(&args.matcher)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown matcher: {}", args.matcher)))?;

    if let Some(threshold) = args.threshold {
        if threshold > 100 {
            return Err(CliError::InvalidInput(
                "Threshold must be between 0 and 100".to_string(),
            ));
        }
    }

    let catalog = InMemoryCatalog::load(catalog_path)?;

    let settings = MatchSettings {
        threshold_override: args.threshold,
        ..Default::default()
    };

    let (sink, mut receiver) = ProgressSink::channel(64);

    // Ctrl+C requests cancellation; the run stops at the next source
    // iteration without committing anything
    let cancel = sink.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let show_progress = !args.no_progress;
    let progress_task = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            if !show_progress {
                continue;
            }
            match event {
                MatchProgress::Started { total_sources, .. } => {
                    eprintln!("Scanning {} source entities...", total_sources);
                }
                MatchProgress::SourceScanned {
                    current,
                    total,
                    queued,
                } => {
                    eprint!("\r  {}/{} scanned, {} queued", current, total, queued);
                    if current == total {
                        eprintln!();
                    }
                }
            }
        }
    });

    let result = Orchestrator::new(settings)
        .run(matcher, &catalog, store, &sink)
        .await;

    // Closing the sink ends the progress stream
    drop(sink);
    progress_task.await.ok();

    let outcome = result?;
    println!("{}", outcome.summary.report());
    if outcome.summary.created > 0 {
        println!(
            "{}",
            formatter.success(&format!("Created {} relation(s)", outcome.summary.created))
        );
    } else {
        println!("{}", formatter.info("No new relations created"));
    }

    Ok(())
}
