// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::core::{FileHandoffStore, FsOps, HandoffStore, HttpUploadClient};
use crate::flow::{
    extract_embedded_payload, BootOutcome, Cancellation, FileSelection, ResultPageBootstrapper,
    SelectionSource, SubmissionOrchestrator, SubmissionOutcome,
};
use crate::roles::{is_known_role, TARGET_ROLES};
use crate::view::document::{render_results_document, render_terminal_transcript};
use crate::view::ViewState;

#[derive(Parser)]
#[command(name = "cvscan")]
#[command(about = "Submit a resume for ATS analysis and render the results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a resume (PDF or DOCX) and store the analysis for the results view
    Submit {
        file: PathBuf,
        /// Role to evaluate the resume against
        #[arg(long)]
        role: Option<String>,
    },
    /// Render the results view from embedded data or the stored analysis
    Result {
        /// Analysis JSON to use instead of the stored one
        #[arg(long)]
        embedded: Option<String>,
        /// Server-rendered results page carrying window.SERVER_DATA
        #[arg(long, conflicts_with = "embedded")]
        page: Option<PathBuf>,
        /// Write the rendered HTML document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List known target roles
    Roles,
}

/// Cancel running animations when the user hits Ctrl-C
fn cancel_on_ctrl_c() -> Cancellation {
    let cancel = Cancellation::new();
    let handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping animations");
            handle.cancel();
        }
    });
    cancel
}

pub async fn handle_command(cli: Cli, config: ClientConfig) -> Result<()> {
    let store: Arc<dyn HandoffStore> = Arc::new(FileHandoffStore::new(config.storage_dir.clone()));

    match cli.command {
        Command::Submit { file, role } => {
            let role = role.unwrap_or_else(|| config.default_role.clone());
            if !is_known_role(&role) {
                warn!("Role '{}' is not in the known role list", role);
            }

            let mut view = ViewState::new();
            let mut selection = FileSelection::new();
            selection.select(&mut view, &file, SelectionSource::Browse)?;

            let transport = Arc::new(HttpUploadClient::new(&config)?);
            let orchestrator = SubmissionOrchestrator::new(&config, transport, store);

            println!("Analyzing {} for {}...", file.display(), role);
            let outcome = orchestrator
                .submit(&mut view, &selection, &role, &cancel_on_ctrl_c())
                .await;
            print!("{}", render_terminal_transcript(&view));

            for notification in &view.notifications {
                println!("! {}", notification);
            }

            match outcome {
                SubmissionOutcome::Completed { result, location } => {
                    println!(
                        "✓ Score {} for {}, continue at {}",
                        result.score, result.role, location
                    );
                }
                SubmissionOutcome::Failed(e) => {
                    if let Some(location) = &view.location {
                        println!("→ {}", location);
                    }
                    anyhow::bail!("Submission failed: {}", e);
                }
                SubmissionOutcome::Ignored => {}
            }
        }

        Command::Result {
            embedded,
            page,
            out,
        } => {
            let embedded = match (embedded, page) {
                (Some(raw), _) => Some(
                    serde_json::from_str::<serde_json::Value>(&raw).context("--embedded must be valid JSON")?,
                ),
                (None, Some(page)) => extract_embedded_payload(&FsOps::read_file_safe(&page).await?),
                (None, None) => None,
            };

            let bootstrapper = ResultPageBootstrapper::new(store, config.routes.root.clone());
            let mut view = ViewState::new();

            match bootstrapper
                .load(&mut view, embedded, &cancel_on_ctrl_c())
                .await
            {
                BootOutcome::Render { source, .. } => {
                    info!("Rendered results from {:?}", source);
                    let document = render_results_document(&view);
                    match out {
                        Some(path) => {
                            FsOps::write_file_safe(&path, &document).await?;
                            println!("✓ Results written to {}", path.display());
                        }
                        None => print!("{}", document),
                    }
                }
                BootOutcome::Redirect(path) => {
                    println!("No analysis found. Start over at {}", path);
                }
            }
        }

        Command::Roles => {
            for (category, roles) in TARGET_ROLES {
                println!("{}", category);
                for role in roles.iter() {
                    println!("  {}", role);
                }
            }
        }
    }

    Ok(())
}
