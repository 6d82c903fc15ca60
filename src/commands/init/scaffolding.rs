//! File scaffolding for the init command.

use crate::config::Config;
use crate::context::RunContext;
use crate::error::{CoverkitError, Result};
use crate::fs::atomic_write_file;
use crate::schema::{self, DocumentType, defaults};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the example environment file written next to the base directory.
pub(super) const ENV_EXAMPLE_FILE: &str = ".env.example";

/// What happened to one scaffolded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scaffold {
    Created,
    Overwritten,
    Kept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ScaffoldEntry {
    pub path: PathBuf,
    pub status: Scaffold,
}

/// Write every scaffold file, in a stable order.
///
/// The environment file holds the user's contact details and is only ever
/// created, never overwritten.
pub(super) fn scaffold(ctx: &RunContext, force: bool) -> Result<Vec<ScaffoldEntry>> {
    let mut report = Vec::new();

    let templates_dir = ctx.templates_dir();
    for doc_type in DocumentType::ALL {
        report.push(scaffold_schema(&templates_dir, doc_type, force)?);
    }

    let example_path = ctx.base_dir.join(ENV_EXAMPLE_FILE);
    report.push(write_file(&example_path, defaults::ENV_EXAMPLE, force)?);
    report.push(write_file(&ctx.env_path(), defaults::ENV_EXAMPLE, false)?);

    let yaml = Config::default().to_yaml()?;
    report.push(write_file(&ctx.config_path, &yaml, force)?);

    let output_dir = ctx.output_dir();
    fs::create_dir_all(&output_dir).map_err(|e| {
        CoverkitError::Output(format!(
            "failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    Ok(report)
}

/// A schema in any supported format counts as present.
fn scaffold_schema(
    templates_dir: &Path,
    doc_type: DocumentType,
    force: bool,
) -> Result<ScaffoldEntry> {
    let yaml_path = templates_dir.join(format!("{}.yaml", doc_type.resource_name()));

    match schema::locate(templates_dir, doc_type) {
        Some(existing) if !force => Ok(ScaffoldEntry {
            path: existing,
            status: Scaffold::Kept,
        }),
        _ => write_file(&yaml_path, defaults::bundled(doc_type), force),
    }
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<ScaffoldEntry> {
    let existed = path.exists();
    if existed && !force {
        debug!(path = %path.display(), "keeping existing file");
        return Ok(ScaffoldEntry {
            path: path.to_path_buf(),
            status: Scaffold::Kept,
        });
    }

    atomic_write_file(path, content)?;
    debug!(path = %path.display(), "wrote scaffold file");

    Ok(ScaffoldEntry {
        path: path.to_path_buf(),
        status: if existed {
            Scaffold::Overwritten
        } else {
            Scaffold::Created
        },
    })
}
