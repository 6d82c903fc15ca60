//! Output dispatch.
//!
//! The dispatcher routes a finished [`DocumentModel`] either to the console
//! or through a [`PagedRenderer`] into `<output_dir>/<title>`. It never
//! modifies the model.

mod console;
pub mod layout;
mod pdf;

pub use pdf::PdfRenderer;

use crate::config::TextStyle;
use crate::document::DocumentModel;
use crate::error::{CoverkitError, Result};
use crate::fs::atomic_write;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paginated-document backend.
pub trait PagedRenderer {
    /// Render the model to the bytes of a complete document.
    fn render(&self, model: &DocumentModel, style: &TextStyle) -> Result<Vec<u8>>;
}

/// Where a document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Console,
    File,
}

impl Destination {
    pub fn from_flag(to_file: bool) -> Self {
        if to_file {
            Destination::File
        } else {
            Destination::Console
        }
    }
}

/// What a dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Console,
    File(PathBuf),
}

/// Routes documents to the console or the paginated backend.
pub struct Dispatcher<'a> {
    renderer: &'a dyn PagedRenderer,
    style: TextStyle,
    output_dir: PathBuf,
}

impl<'a> Dispatcher<'a> {
    pub fn new(renderer: &'a dyn PagedRenderer, style: TextStyle, output_dir: &Path) -> Self {
        Self {
            renderer,
            style,
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Send `model` to `destination`, writing console text and confirmations to `out`.
    ///
    /// # Errors
    ///
    /// * `CoverkitError::Output` - Console write, directory creation, or file write failed
    /// * `CoverkitError::Render` - The paginated backend failed
    pub fn dispatch(
        &self,
        model: &DocumentModel,
        destination: Destination,
        out: &mut dyn Write,
    ) -> Result<Dispatched> {
        match destination {
            Destination::Console => {
                console::render(model, out)
                    .map_err(|e| CoverkitError::Output(format!("failed to write to console: {}", e)))?;
                Ok(Dispatched::Console)
            }
            Destination::File => {
                let path = self.output_dir.join(&model.title);
                let bytes = self.renderer.render(model, &self.style)?;
                atomic_write(&path, &bytes)?;

                info!(path = %path.display(), bytes = bytes.len(), "wrote document");
                writeln!(out, "Created successfully: {}", path.display()).map_err(|e| {
                    CoverkitError::Output(format!("failed to write to console: {}", e))
                })?;
                Ok(Dispatched::File(path))
            }
        }
    }
}
