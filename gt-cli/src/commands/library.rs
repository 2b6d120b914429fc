//! Library element commands.
//!
//! `export` and `import` move the verbatim JSON of an element. Fields this
//! tool does not model pass through untouched.

use std::io::Write;
use std::path::PathBuf;

use bytes::Bytes;
use clap::{Args, Subcommand};
use console::style;
use tracing::info;

use gt_api::ApiClient;
use gt_core::error::{GtError, GtResult};
use gt_models::LibraryElement;

use super::{new_table, or_dash, print_json, truncate};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum LibraryAction {
    /// List library elements.
    Search,
    /// Show one library element.
    Get {
        #[command(flatten)]
        element: ElementSelector,
    },
    /// Write the raw JSON of a library element to a file or stdout.
    Export {
        #[command(flatten)]
        element: ElementSelector,
        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Patch a library element with the JSON in a file.
    Import {
        /// UID of the element to patch.
        #[arg(long)]
        uid: String,
        /// JSON file with the patch body.
        file: PathBuf,
    },
}

/// Exactly one of `--uid` / `--name`.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ElementSelector {
    /// Element UID.
    #[arg(long)]
    uid: Option<String>,
    /// Element name.
    #[arg(long)]
    name: Option<String>,
}

fn missing_selector() -> GtError {
    GtError::MissingConfig("--uid or --name".into())
}

impl ElementSelector {
    async fn fetch(&self, api: &ApiClient) -> GtResult<LibraryElement> {
        match (&self.uid, &self.name) {
            (Some(uid), _) => api.get_library_element_by_uid(uid).await,
            (None, Some(name)) => api.get_library_element_by_name(name).await,
            (None, None) => Err(missing_selector()),
        }
    }

    async fn fetch_raw(&self, api: &ApiClient) -> GtResult<Bytes> {
        match (&self.uid, &self.name) {
            (Some(uid), _) => api.get_raw_library_element_by_uid(uid).await,
            (None, Some(name)) => api.get_raw_library_element_by_name(name).await,
            (None, None) => Err(missing_selector()),
        }
    }
}

pub async fn run(api: &ApiClient, action: LibraryAction, format: OutputFormat) -> GtResult<()> {
    match action {
        LibraryAction::Search => {
            let found = api.search_library_elements().await?;
            match format {
                OutputFormat::Json => print_json(&found)?,
                OutputFormat::Text => {
                    let result = &found.result;
                    if result.elements.is_empty() {
                        println!("No library elements.");
                        return Ok(());
                    }
                    let mut table =
                        new_table(["UID", "Name", "Kind", "Type", "Folder", "Version", "Dashboards"]);
                    for e in &result.elements {
                        table.add_row(vec![
                            e.uid.clone(),
                            truncate(&e.name, 40),
                            e.kind().to_string(),
                            or_dash(&e.element_type).to_string(),
                            or_dash(&e.meta.folder_name).to_string(),
                            e.version.to_string(),
                            e.meta.connected_dashboards.to_string(),
                        ]);
                    }
                    println!("{table}");
                    println!(
                        "\n{} of {} element(s)",
                        result.elements.len(),
                        result.total_count
                    );
                }
            }
        }
        LibraryAction::Get { element } => {
            let e = element.fetch(api).await?;
            match format {
                OutputFormat::Json => print_json(&e)?,
                OutputFormat::Text => {
                    println!("{}", style(&e.name).bold().underlined());
                    println!("  UID:         {}", e.uid);
                    println!("  Kind:        {}", e.kind());
                    println!("  Type:        {}", or_dash(&e.element_type));
                    println!("  Description: {}", or_dash(&e.description));
                    println!("  Version:     {}", e.version);
                    println!(
                        "  Folder:      {} ({})",
                        or_dash(&e.meta.folder_name),
                        or_dash(&e.meta.folder_uid)
                    );
                    println!("  Dashboards:  {}", e.meta.connected_dashboards);
                    println!(
                        "  Created:     {} by {}",
                        or_dash(&e.meta.created),
                        or_dash(&e.meta.created_by.name)
                    );
                    println!(
                        "  Updated:     {} by {}",
                        or_dash(&e.meta.updated),
                        or_dash(&e.meta.updated_by.name)
                    );
                }
            }
        }
        LibraryAction::Export { element, out } => {
            let raw = element.fetch_raw(api).await?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &raw)?;
                    info!("exported {} bytes to {}", raw.len(), path.display());
                    eprintln!(
                        "  {} Wrote {}",
                        style("OK").green().bold(),
                        path.display()
                    );
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&raw)?;
                    stdout.write_all(b"\n")?;
                }
            }
        }
        LibraryAction::Import { uid, file } => {
            let body = std::fs::read(&file)?;
            info!("patching library element {uid} from {}", file.display());
            api.update_raw_library_element_by_uid(&uid, body).await?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({ "uid": uid, "updated": true }))?,
                OutputFormat::Text => {
                    println!("  {} Library element {uid} updated", style("OK").green().bold())
                }
            }
        }
    }
    Ok(())
}
