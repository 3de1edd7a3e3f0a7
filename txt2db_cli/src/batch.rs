use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;
use txt2db_core::script::{split_script, ScriptLine};

use crate::backend::Backend;
use crate::render::render_response;

#[derive(Debug)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub transcript: PathBuf,
}

/// Accepts `name` or `name.txt`.
pub fn resolve_batch_path(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }
    if path.extension().is_none() {
        let with_ext = path.with_extension("txt");
        if with_ext.is_file() {
            return Some(with_ext);
        }
    }
    None
}

fn sanitize_for_folder(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Runs every command line of `name` and writes a transcript to
/// `<output_dir>/batch_<timestamp>_<stem>/<stem>_output.txt`. Comment lines
/// are echoed; failures are reported and the batch keeps going.
pub fn run_batch_file(
    backend: &mut dyn Backend,
    name: &str,
    output_dir: &Path,
) -> Result<BatchSummary> {
    let Some(path) = resolve_batch_path(name) else {
        bail!("Batch file not found: {name}");
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "batch".to_string());
    let timestamp = chrono::Local::now().format("%Y-%m-%d_%I-%M%p");
    let dir = output_dir.join(format!("batch_{}_{}", timestamp, sanitize_for_folder(&stem)));
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let transcript = dir.join(format!("{stem}_output.txt"));
    let mut out = BufWriter::new(
        File::create(&transcript)
            .with_context(|| format!("failed to create {}", transcript.display()))?,
    );

    let mut succeeded = 0usize;
    let mut failed = 0usize;
    let mut index = 0usize;
    for line in split_script(&text) {
        match line {
            ScriptLine::Comment(comment) => {
                println!("{comment}");
                writeln!(out, "{comment}")?;
            }
            ScriptLine::Command(command) => {
                index += 1;
                let response = backend.execute(&command)?;
                if response.is_error() {
                    failed += 1;
                } else {
                    succeeded += 1;
                }
                let rendered = render_response(&response);
                let block = format!("[{index}] {command}\n{rendered}\n");
                println!("{block}");
                writeln!(out, "{block}")?;
            }
        }
    }
    out.flush()?;

    info!(
        file = %path.display(),
        succeeded,
        failed,
        transcript = %transcript.display(),
        "batch finished"
    );
    Ok(BatchSummary {
        succeeded,
        failed,
        transcript,
    })
}
