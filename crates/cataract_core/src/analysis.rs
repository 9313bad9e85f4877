//! Simulated cataract "detection".
//!
//! Nothing here looks at pixels. A result is drawn from a random source so the
//! rest of the app can be exercised end to end; a real model can replace
//! [`SimulatedAnalyzer`] by implementing [`Analyzer`].

use crate::upload::DecodedImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Confidence values the simulation can produce, in percent.
pub const CONFIDENCE_RANGE: RangeInclusive<u8> = 70..=99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Early,
    Moderate,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Early => "Early",
            Severity::Moderate => "Moderate",
        }
    }
}

/// Outcome of one Analyze action.
///
/// `severity` is [`Severity::None`] exactly when no condition was found; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    has_condition: bool,
    severity: Severity,
    confidence: u8,
}

impl AnalysisResult {
    /// A detected condition. `Severity::None` is not a detection and yields
    /// `None`, as does a confidence outside [`CONFIDENCE_RANGE`].
    pub fn detected(severity: Severity, confidence: u8) -> Option<Self> {
        if severity == Severity::None || !CONFIDENCE_RANGE.contains(&confidence) {
            return None;
        }
        Some(Self {
            has_condition: true,
            severity,
            confidence,
        })
    }

    pub fn clear(confidence: u8) -> Option<Self> {
        if !CONFIDENCE_RANGE.contains(&confidence) {
            return None;
        }
        Some(Self {
            has_condition: false,
            severity: Severity::None,
            confidence,
        })
    }

    pub fn has_condition(&self) -> bool {
        self.has_condition
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }
}

/// Produces a result for an uploaded image.
pub trait Analyzer {
    fn analyze(&mut self, image: &DecodedImage) -> AnalysisResult;
}

/// Draws a result from `rng`: a fair coin for the detection, a fair coin
/// between Moderate and Early when detected, and a uniform confidence.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R) -> AnalysisResult {
    let has_condition = rng.gen_bool(0.5);
    let confidence = rng.gen_range(CONFIDENCE_RANGE);
    let severity = if has_condition {
        if rng.gen_bool(0.5) {
            Severity::Moderate
        } else {
            Severity::Early
        }
    } else {
        Severity::None
    };
    AnalysisResult {
        has_condition,
        severity,
        confidence,
    }
}

pub struct SimulatedAnalyzer<R = StdRng> {
    rng: R,
}

impl SimulatedAnalyzer<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence of results for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedAnalyzer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Analyzer for SimulatedAnalyzer<R> {
    fn analyze(&mut self, image: &DecodedImage) -> AnalysisResult {
        let result = simulate(&mut self.rng);
        tracing::debug!(
            "Simulated analysis of {}x{} image: {:?}",
            image.width(),
            image.height(),
            result
        );
        result
    }
}
