//! Implementation of the `coverkit generate` command.
//!
//! Collects the field set, loads the environment file (cover letter only)
//! and the schema, assembles the document model, then hands it to the
//! output dispatcher.

mod collect;


use crate::assemble::{AssemblyInputs, assemble};
use crate::cli::GenerateArgs;
use crate::context::RunContext;
use crate::env_file::{self, EnvMap};
use crate::error::{CoverkitError, Result};
use crate::fields::FieldSet;
use crate::output::{Dispatched, Dispatcher, PagedRenderer, PdfRenderer};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::schema::{self, DocumentType};
use chrono::Local;
use collect::Collector;
use std::io::{self, Write};
use tracing::info;

/// Execute the `coverkit generate` command on the terminal.
pub fn cmd_generate(ctx: &RunContext, args: &GenerateArgs) -> Result<()> {
    let mut terminal = TerminalPrompter;
    let prompter: Option<&mut dyn Prompter> = if args.no_input {
        None
    } else {
        Some(&mut terminal)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(ctx, args, prompter, &PdfRenderer, &mut out).map(|_| ())
}

/// Generate one document with injected prompter, renderer and output stream.
///
/// `args` and `prompter` share one lifetime: the collector borrows both.
pub(super) fn run<'a>(
    ctx: &RunContext,
    args: &'a GenerateArgs,
    prompter: Option<&'a mut dyn Prompter>,
    renderer: &dyn PagedRenderer,
    out: &mut dyn Write,
) -> Result<Dispatched> {
    // Captured once so the heading and the title agree.
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let mut collector = Collector::new(args, prompter);
    let doc_type = collector.doc_type()?;
    let fields = collector.fields(doc_type, date, ctx.config.default_separator.as_deref())?;
    let destination = collector.destination()?;

    let env = match doc_type {
        DocumentType::CoverLetter => env_file::load(ctx.env_path())?,
        _ => EnvMap::new(),
    };
    let schema = schema::load(ctx.templates_dir(), doc_type)?;

    let model = assemble(
        doc_type,
        AssemblyInputs {
            fields: &fields,
            env: &env,
            schema: &schema,
            initials: &ctx.config.author_initials,
        },
    )?;
    info!(doc_type = %doc_type, title = %model.title, "assembled document");

    let output_dir = ctx.output_dir();
    let dispatcher = Dispatcher::new(renderer, ctx.config.style, &output_dir);
    let dispatched = dispatcher.dispatch(&model, destination, out)?;

    if let Dispatched::File(_) = dispatched {
        writeln!(out, "{}", details(&fields))
            .map_err(|e| CoverkitError::Output(format!("failed to write to console: {}", e)))?;
    }

    Ok(dispatched)
}

/// One-line summary of the values a document was generated with.
fn details(fields: &FieldSet) -> String {
    format!(
        "Details: role = {}, company = {}, platform = {}, startup = {}, hiring manager = {}",
        fields.role,
        fields.company,
        fields.platform.as_deref().unwrap_or("unknown"),
        fields.startup,
        fields.hiring_manager
    )
}
