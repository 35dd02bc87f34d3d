use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing backend or chart layout failed.
    #[error("chart drawing failed")]
    Draw(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(Box::new(err))
    }
}
