use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("Image index {index} is out of range (gallery has {len} images)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Gallery has no images")]
    EmptyGallery,
}
