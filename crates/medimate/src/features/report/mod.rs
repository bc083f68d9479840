mod composer;
mod renderer;

pub use composer::{compose, ReportDocument, ReportError, ReportRequest, MAX_AGE, REPORT_TITLE};
pub use renderer::{DocumentRenderer, FileRenderer, RenderError, RenderedReport};

use std::sync::Arc;

use tracing::info;

/// Service composing report validation and the rendering backend so the
/// router and CLI share one code path.
pub struct ReportService<R> {
    renderer: Arc<R>,
}

/// Outcome of a successful generation: the composed document and the
/// persisted artifact.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub document: ReportDocument,
    pub artifact: RenderedReport,
}

impl<R> ReportService<R>
where
    R: DocumentRenderer + 'static,
{
    pub fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    /// Validate the request, compose the document, and hand it to the
    /// rendering backend.
    pub fn generate(&self, request: &ReportRequest) -> Result<GeneratedReport, ReportServiceError> {
        let document = compose(request)?;
        let artifact = self.renderer.render(&document)?;
        info!(path = %artifact.path.display(), "health report rendered");
        Ok(GeneratedReport { document, artifact })
    }
}

/// Error raised by the report service, separating invalid input from
/// backend failures.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error(transparent)]
    Compose(#[from] ReportError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
