use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// The given string is not a `#rrggbb` color.
    #[error("invalid color '{0}', expected #rrggbb")]
    Color(String),
    /// The plotting backend failed while drawing or writing the image.
    #[error("drawing failed: {0}")]
    Drawing(String),
    /// The output path has an extension no backend can write.
    #[error("unsupported image format '{0}', try png, bmp, jpg or svg")]
    UnsupportedFormat(String),
    /// The interactive window could not be opened.
    #[error("could not open the chart window: {0}")]
    Window(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(e.to_string())
    }
}
