//! Zip packaging of report files

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Default file name of the report bundle
pub const REPORT_BUNDLE_FILE: &str = "infocontent_report.zip";

/// Package report files into a zip archive.
///
/// Each file is stored under its own file name. The individual files are
/// removed once the archive has been finalized.
pub fn package_reports(files: &[PathBuf], zip_path: &Path) -> Result<()> {
    let zip_file = std::fs::File::create(zip_path)
        .with_context(|| format!("Failed to create zip file: {}", zip_path.display()))?;

    let mut zip = ZipWriter::new(zip_file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for path in files {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Report path has no file name: {}", path.display()))?;
        zip.start_file(filename, options)
            .with_context(|| format!("Failed to add {} to zip", filename))?;
        let mut content = Vec::new();
        std::fs::File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?
            .read_to_end(&mut content)?;
        zip.write_all(&content)?;
    }

    zip.finish().context("Failed to finalize zip file")?;

    for path in files {
        if let Err(err) = std::fs::remove_file(path) {
            log::warn!("could not remove {} after packaging: {}", path.display(), err);
        }
    }

    Ok(())
}
