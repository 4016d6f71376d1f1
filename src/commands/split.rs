use crate::error::SplitError;
use crate::page_range::PageRange;
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A PDF written by [`split_pdf`] and the source pages it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub path: PathBuf,
    pub range: PageRange,
}

/// Progress reported by [`split_pdf`] as soon as it happens.
#[derive(Debug, PartialEq, Eq)]
pub enum SplitEvent<'a> {
    DirectoryCreated(&'a Path),
    FileCreated(&'a OutputFile),
}

/// Split `input` into one PDF per range under `output_folder/<base name>/`.
///
/// Ranges are processed in the order given. A range that does not fit the
/// document is logged and skipped; every other failure aborts the split.
/// `on_event` sees every created directory and file before the next step
/// runs, so work done before a failure is still reported.
pub fn split_pdf<P, Q, F>(
    input: P,
    ranges: &[PageRange],
    output_folder: Q,
    mut on_event: F,
) -> Result<Vec<OutputFile>, SplitError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(SplitEvent<'_>),
{
    let input = input.as_ref();
    let output_folder = output_folder.as_ref();

    if !input.exists() {
        return Err(SplitError::DocumentNotFound(input.to_path_buf()));
    }

    let base_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let doc_folder = output_folder.join(&base_name);
    for dir in [output_folder, doc_folder.as_path()] {
        if ensure_dir(dir)? {
            on_event(SplitEvent::DirectoryCreated(dir));
        }
    }

    let doc = PdfDocument::open(input)?;
    let total_pages = doc.page_count();

    let mut output_files = Vec::new();
    for range in ranges {
        if !range.fits(total_pages) {
            warn!("{}", skipped_range(range, total_pages));
            continue;
        }

        let output_path = doc_folder.join(format!("{}_{}.pdf", base_name, range));
        let mut new_doc = doc.extract_range(range)?;
        PdfDocument::save(&mut new_doc, &output_path)?;
        info!(
            "Wrote {} page(s) to {}",
            range.page_count(),
            output_path.display()
        );

        let output = OutputFile {
            path: output_path,
            range: *range,
        };
        on_event(SplitEvent::FileCreated(&output));
        output_files.push(output);
    }

    Ok(output_files)
}

fn skipped_range(range: &PageRange, total_pages: u32) -> SplitError {
    SplitError::InvalidRange {
        start: range.start,
        end: range.end,
        total_pages,
    }
}

/// Returns whether the directory had to be created.
fn ensure_dir(path: &Path) -> Result<bool, SplitError> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path).map_err(|source| SplitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    ranges: &[PageRange],
    output_folder: Q,
    json: bool,
) -> Result<()> {
    let input = input.as_ref();
    let output_files = split_pdf(input, ranges, output_folder, |event| {
        if !json {
            println!("{}", describe(&event));
        }
    })
    .with_context(|| format!("Failed to split PDF: {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output_files)?);
        return Ok(());
    }

    println!("Split complete: {} file(s) created.", output_files.len());

    Ok(())
}

fn describe(event: &SplitEvent<'_>) -> String {
    match event {
        SplitEvent::DirectoryCreated(path) => format!("Created directory: {}", path.display()),
        SplitEvent::FileCreated(output) => format!("Created: {}", output.path.display()),
    }
}
