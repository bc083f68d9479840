use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use super::composer::ReportDocument;
use crate::config::ReportConfig;

/// Line width used when centering the title in the plain-text layout.
const PAGE_WIDTH: usize = 72;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to persist report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a rendered artifact landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Boundary to the document backend. Implementations own pagination,
/// layout, and byte-level encoding of the artifact; callers only supply
/// the structured field sequence.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &ReportDocument) -> Result<RenderedReport, RenderError>;
}

/// Plain-text backend persisting the report under a fixed file name in a
/// configured directory.
#[derive(Debug, Clone)]
pub struct FileRenderer {
    output_dir: PathBuf,
    file_name: String,
}

impl FileRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.output_dir.clone(), config.file_name.clone())
    }

    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    fn layout(document: &ReportDocument) -> String {
        let mut content = String::new();
        let title = document.title.trim();
        let pad = PAGE_WIDTH.saturating_sub(title.len()) / 2;
        writeln!(content, "{:pad$}{title}", "").expect("write title");
        for line in &document.body {
            writeln!(content, "{line}").expect("write body line");
        }
        content
    }
}

impl DocumentRenderer for FileRenderer {
    fn render(&self, document: &ReportDocument) -> Result<RenderedReport, RenderError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.target_path();
        let content = Self::layout(document);
        fs::write(&path, content.as_bytes()).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(RenderedReport {
            path,
            bytes_written: content.len() as u64,
        })
    }
}
