use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Element not found: {0}")]
    MissingElement(&'static str),
}
