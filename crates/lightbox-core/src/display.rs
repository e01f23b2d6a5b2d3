use crate::image_set::ImageRef;
use serde::Serialize;

/// What the lightbox should currently show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub reference: ImageRef,
    /// 1-based position within the gallery
    pub position: usize,
    pub total: usize,
}

impl Display {
    /// Counter text such as "2 / 3"
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}
