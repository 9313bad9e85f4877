//! Core of the CataractEye demo: upload checks, preview fitting, the simulated
//! analyzer, result presentation and the view state machine. Nothing in here
//! depends on a GUI toolkit.

pub mod analysis;
pub mod config;
pub mod error;
pub mod present;
pub mod preview;
pub mod session;
pub mod upload;
pub mod view;

pub use analysis::{AnalysisResult, Analyzer, Severity, SimulatedAnalyzer, simulate};
pub use config::{AppConfig, Bounds, UploadLimits};
pub use error::{SessionError, UploadError};
pub use present::{Icon, Overlay, ResultView, Theme, Tone, present};
pub use preview::{ScaledDimensions, fit_within};
pub use session::{AnalysisToken, Completion, Session, ViewState};
pub use upload::{DecodedImage, UploadedImage, select_single};
pub use view::{AnalyzeControl, PreviewView, ResultsRegion, View};
