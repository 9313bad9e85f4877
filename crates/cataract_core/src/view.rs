//! Declarative description of what the window shows for a given state.
//!
//! The GUI draws a [`View`] every frame and keeps no display state of its own
//! beyond textures keyed by [`PreviewView::image_id`].

use crate::preview::ScaledDimensions;
use crate::present::{Overlay, ResultView};

pub const ANALYZE_LABEL: &str = "Analyze";
pub const ANALYZING_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeControl {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

impl AnalyzeControl {
    pub fn ready() -> Self {
        Self {
            enabled: true,
            busy: false,
            label: ANALYZE_LABEL,
        }
    }

    pub fn busy() -> Self {
        Self {
            enabled: false,
            busy: true,
            label: ANALYZING_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    /// Changes whenever a new image is accepted.
    pub image_id: u64,
    pub name: String,
    pub dims: ScaledDimensions,
    pub analyze: AnalyzeControl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsRegion {
    /// "No Image Analyzed".
    Placeholder,
    Result(ResultView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub upload_visible: bool,
    pub preview: Option<PreviewView>,
    pub results: ResultsRegion,
    pub overlay: Option<Overlay>,
}

impl View {
    pub fn idle() -> Self {
        Self {
            upload_visible: true,
            preview: None,
            results: ResultsRegion::Placeholder,
            overlay: None,
        }
    }
}
