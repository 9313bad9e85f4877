//! Upload / preview / analyze / reset state machine.

use crate::analysis::{AnalysisResult, Analyzer};
use crate::config::AppConfig;
use crate::error::{SessionError, UploadError};
use crate::present::{Overlay, present};
use crate::preview::{self, ScaledDimensions};
use crate::upload::{DecodedImage, UploadedImage};
use crate::view::{AnalyzeControl, PreviewView, ResultsRegion, View};
use image::RgbaImage;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewState {
    Idle,
    PreviewReady,
    Analyzing,
    ResultShown,
}

/// Identifies one Analyze request. Only the most recent, non-reset request
/// may deliver a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisToken(u64);

/// What happened to a result handed to [`Session::complete_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The request was reset or superseded; the result was dropped.
    Stale,
}

#[derive(Debug, Clone, Copy)]
struct PendingAnalysis {
    token: AnalysisToken,
    due: Instant,
}

#[derive(Debug)]
struct LoadedImage {
    id: u64,
    name: String,
    decoded: DecodedImage,
    dims: ScaledDimensions,
    preview: RgbaImage,
}

#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    state: ViewState,
    image: Option<LoadedImage>,
    result: Option<AnalysisResult>,
    pending: Option<PendingAnalysis>,
    next_token: u64,
    next_image_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: ViewState::Idle,
            image: None,
            result: None,
            pending: None,
            next_token: 0,
            next_image_id: 0,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn scaled_dimensions(&self) -> Option<ScaledDimensions> {
        self.image.as_ref().map(|img| img.dims)
    }

    /// Bitmap already resampled to the preview surface.
    pub fn preview_pixels(&self) -> Option<&RgbaImage> {
        self.image.as_ref().map(|img| &img.preview)
    }

    /// Validates, decodes and fits `upload`. Any failure leaves the session as
    /// it was.
    pub fn upload(&mut self, upload: UploadedImage) -> Result<ScaledDimensions, SessionError> {
        self.expect_state("upload an image", &[ViewState::Idle])?;
        let loaded = self.load(&upload).inspect_err(|e| {
            tracing::warn!("Rejected upload {}: {e}", upload.name);
        })?;
        let dims = loaded.dims;
        tracing::info!(
            "Accepted {} ({} bytes, {}x{} -> {:.0}x{:.0})",
            upload.name,
            upload.size(),
            loaded.decoded.width(),
            loaded.decoded.height(),
            dims.width,
            dims.height
        );
        self.image = Some(loaded);
        self.state = ViewState::PreviewReady;
        Ok(dims)
    }

    fn load(&mut self, upload: &UploadedImage) -> Result<LoadedImage, UploadError> {
        upload.validate(self.config.upload_limits())?;
        let decoded = upload.decode()?;
        let dims = preview::scaled_for(&decoded, self.config.preview);
        let preview = preview::render(&decoded, dims);
        self.next_image_id += 1;
        Ok(LoadedImage {
            id: self.next_image_id,
            name: upload.name.clone(),
            decoded,
            dims,
            preview,
        })
    }

    /// Starts the simulated analysis; the result becomes available through
    /// [`Session::poll`] once the configured delay has passed.
    pub fn start_analysis(&mut self, now: Instant) -> Result<AnalysisToken, SessionError> {
        self.expect_state(
            "start an analysis",
            &[ViewState::PreviewReady, ViewState::ResultShown],
        )?;
        self.next_token += 1;
        let token = AnalysisToken(self.next_token);
        self.pending = Some(PendingAnalysis {
            token,
            due: now + self.config.analysis_delay(),
        });
        self.state = ViewState::Analyzing;
        tracing::debug!("Analysis {} started", token.0);
        Ok(token)
    }

    /// Applies `result` if `token` is still the in-flight request.
    pub fn complete_analysis(&mut self, token: AnalysisToken, result: AnalysisResult) -> Completion {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                self.result = Some(result);
                self.state = ViewState::ResultShown;
                tracing::info!(
                    "Analysis {} finished: condition={}, severity={}, confidence={}%",
                    token.0,
                    result.has_condition(),
                    result.severity().label(),
                    result.confidence()
                );
                Completion::Applied
            }
            _ => {
                tracing::debug!("Dropping stale analysis {}", token.0);
                Completion::Stale
            }
        }
    }

    /// Runs the pending analysis once its delay has elapsed.
    pub fn poll<A: Analyzer + ?Sized>(
        &mut self,
        now: Instant,
        analyzer: &mut A,
    ) -> Option<AnalysisResult> {
        let pending = self.pending.filter(|p| now >= p.due)?;
        let image = self.image.as_ref()?;
        let result = analyzer.analyze(&image.decoded);
        match self.complete_analysis(pending.token, result) {
            Completion::Applied => Some(result),
            Completion::Stale => None,
        }
    }

    /// Remaining delay of the in-flight analysis, if any.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }

    /// Back to [`ViewState::Idle`] from anywhere, invalidating any in-flight
    /// analysis.
    pub fn reset(&mut self) {
        if let Some(p) = self.pending.take() {
            tracing::debug!("Reset cancels analysis {}", p.token.0);
        }
        self.image = None;
        self.result = None;
        self.state = ViewState::Idle;
    }

    pub fn view(&self) -> View {
        let Some(image) = &self.image else {
            return View::idle();
        };
        let analyze = if self.state == ViewState::Analyzing {
            AnalyzeControl::busy()
        } else {
            AnalyzeControl::ready()
        };
        let (results, overlay) = match &self.result {
            Some(result) => (
                ResultsRegion::Result(present(result)),
                Some(Overlay::centered(
                    image.dims,
                    self.config.overlay_fraction,
                    result.has_condition(),
                )),
            ),
            None => (ResultsRegion::Placeholder, None),
        };
        View {
            upload_visible: false,
            preview: Some(PreviewView {
                image_id: image.id,
                name: image.name.clone(),
                dims: image.dims,
                analyze,
            }),
            results,
            overlay,
        }
    }

    fn expect_state(&self, action: &'static str, allowed: &[ViewState]) -> Result<(), SessionError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                state: self.state,
            })
        }
    }
}
