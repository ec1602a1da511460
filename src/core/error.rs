use thiserror::Error;

/// Errors raised at the navigation boundary of the slider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("gallery has no slides")]
    Empty,
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}
