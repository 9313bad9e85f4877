//! Turns an [`AnalysisResult`] into what the results panel shows.
//!
//! Everything here is a pure function of the result, so presenting the same
//! result twice gives the same [`ResultView`].

use crate::analysis::{AnalysisResult, Severity};
use crate::preview::ScaledDimensions;

/// Colour family of a piece of result UI. The GUI maps these to concrete
/// colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Warning,
    Check,
    Cloud,
    Sun,
    Smile,
    Meh,
    Frown,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Amber card, pulsing: a condition was detected.
    Warning,
    /// Green card.
    Success,
}

impl Theme {
    pub fn tone(self) -> Tone {
        match self {
            Theme::Warning => Tone::Yellow,
            Theme::Success => Tone::Green,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Theme::Warning => Icon::Warning,
            Theme::Success => Icon::Check,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    pub fn of(confidence: u8) -> Self {
        match confidence {
            c if c > 85 => ConfidenceBand::High,
            c if c > 75 => ConfidenceBand::Moderate,
            _ => ConfidenceBand::Low,
        }
    }

    fn tone(self) -> Tone {
        match self {
            ConfidenceBand::High => Tone::Green,
            ConfidenceBand::Moderate => Tone::Yellow,
            ConfidenceBand::Low => Tone::Orange,
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            ConfidenceBand::High => "High confidence in analysis results.",
            ConfidenceBand::Moderate => "Moderate confidence in analysis results.",
            ConfidenceBand::Low => {
                "Lower confidence in analysis results. Consider retaking the image."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub title: &'static str,
    pub value: String,
    pub icon: Icon,
    pub icon_tone: Tone,
    /// Tone of the value text; follows the overall theme.
    pub value_tone: Tone,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub theme: Theme,
    pub title: &'static str,
    pub description: String,
    pub pulse: bool,
    pub details: [DetailRow; 3],
}

pub fn present(result: &AnalysisResult) -> ResultView {
    let detected = result.has_condition();
    let severity = result.severity();
    let confidence = result.confidence();
    let theme = if detected {
        Theme::Warning
    } else {
        Theme::Success
    };
    let value_tone = theme.tone();

    let (title, description) = if detected {
        (
            "Potential Cataract Detected",
            format!(
                "Our analysis detected signs of {} cataracts with {}% confidence.",
                severity.label().to_lowercase(),
                confidence
            ),
        )
    } else {
        (
            "No Cataract Detected",
            format!(
                "Our analysis found no significant signs of cataracts ({}% confidence).",
                confidence
            ),
        )
    };

    let cloudiness = if detected {
        DetailRow {
            title: "Cloudiness Detection",
            value: "Detected".to_string(),
            icon: Icon::Cloud,
            icon_tone: Tone::Yellow,
            value_tone,
            description: "The lens appears cloudy, which is a common sign of cataracts.",
        }
    } else {
        DetailRow {
            title: "Cloudiness Detection",
            value: "Not Detected".to_string(),
            icon: Icon::Sun,
            icon_tone: Tone::Green,
            value_tone,
            description: "The lens appears clear with no significant cloudiness.",
        }
    };

    let (severity_icon, severity_tone, severity_text) = match severity {
        Severity::None => (Icon::Smile, Tone::Green, "No signs of cataract development."),
        Severity::Early => (
            Icon::Meh,
            Tone::Yellow,
            "Early signs detected. Regular monitoring recommended.",
        ),
        Severity::Moderate => (
            Icon::Frown,
            Tone::Orange,
            "Moderate signs detected. Consultation with a specialist recommended.",
        ),
    };

    let band = ConfidenceBand::of(confidence);

    ResultView {
        theme,
        title,
        description,
        pulse: detected,
        details: [
            cloudiness,
            DetailRow {
                title: "Severity Level",
                value: severity.label().to_string(),
                icon: severity_icon,
                icon_tone: severity_tone,
                value_tone,
                description: severity_text,
            },
            DetailRow {
                title: "Confidence Level",
                value: format!("{confidence}%"),
                icon: Icon::Chart,
                icon_tone: band.tone(),
                value_tone,
                description: band.sentence(),
            },
        ],
    }
}

/// Circle drawn over the preview once a result is shown. Coordinates are
/// relative to the top-left corner of the preview surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub left: f32,
    pub top: f32,
    pub diameter: f32,
    /// Unmultiplied RGBA.
    pub color: [u8; 4],
}

/// rgba(255, 165, 0, 0.7)
pub const OVERLAY_DETECTED: [u8; 4] = [255, 165, 0, 179];
/// rgba(0, 255, 0, 0.7)
pub const OVERLAY_CLEAR: [u8; 4] = [0, 255, 0, 179];

impl Overlay {
    pub fn centered(surface: ScaledDimensions, fraction: f32, detected: bool) -> Self {
        let (w, h) = (surface.width as f32, surface.height as f32);
        let diameter = w.min(h) * fraction;
        Self {
            left: w / 2.0 - diameter / 2.0,
            top: h / 2.0 - diameter / 2.0,
            diameter,
            color: if detected {
                OVERLAY_DETECTED
            } else {
                OVERLAY_CLEAR
            },
        }
    }

    pub fn center(&self) -> [f32; 2] {
        let r = self.diameter / 2.0;
        [self.left + r, self.top + r]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn detected(severity: Severity, confidence: u8) -> AnalysisResult {
        AnalysisResult::detected(severity, confidence).expect("valid detection")
    }

    #[test]
    fn detected_result_uses_warning_theme() {
        let view = present(&detected(Severity::Moderate, 91));
        assert_eq!(view.theme, Theme::Warning);
        assert!(view.pulse);
        assert_eq!(view.title, "Potential Cataract Detected");
        assert_eq!(
            view.description,
            "Our analysis detected signs of moderate cataracts with 91% confidence."
        );
        assert_eq!(view.details[0].value, "Detected");
        assert_eq!(view.details[1].value, "Moderate");
        assert_eq!(view.details[1].icon, Icon::Frown);
        assert_eq!(view.details[2].value, "91%");
        assert!(view.details.iter().all(|d| d.value_tone == Tone::Yellow));
    }

    #[test]
    fn clear_result_uses_success_theme() {
        let view = present(&AnalysisResult::clear(72).expect("valid"));
        assert_eq!(view.theme, Theme::Success);
        assert!(!view.pulse);
        assert_eq!(view.title, "No Cataract Detected");
        assert_eq!(
            view.description,
            "Our analysis found no significant signs of cataracts (72% confidence)."
        );
        assert_eq!(view.details[0].value, "Not Detected");
        assert_eq!(view.details[1].value, "None");
        assert_eq!(view.details[1].icon, Icon::Smile);
        assert!(view.details.iter().all(|d| d.value_tone == Tone::Green));
    }

    #[rstest]
    #[case(99, ConfidenceBand::High)]
    #[case(86, ConfidenceBand::High)]
    #[case(85, ConfidenceBand::Moderate)]
    #[case(76, ConfidenceBand::Moderate)]
    #[case(75, ConfidenceBand::Low)]
    #[case(70, ConfidenceBand::Low)]
    fn confidence_thresholds(#[case] confidence: u8, #[case] band: ConfidenceBand) {
        assert_eq!(ConfidenceBand::of(confidence), band);
        let view = present(&detected(Severity::Early, confidence));
        assert_eq!(view.details[2].description, band.sentence());
        assert_eq!(view.details[2].icon_tone, band.tone());
    }

    #[test]
    fn presenting_twice_is_identical() {
        let result = detected(Severity::Early, 80);
        let first = present(&result);
        let second = present(&result);
        assert_eq!(first, second);
        assert_eq!(second.details.len(), 3);
    }

    #[test]
    fn overlay_is_centered_at_thirty_percent_of_short_side() {
        let dims = ScaledDimensions {
            width: 500.0,
            height: 250.0,
        };
        let o = Overlay::centered(dims, 0.3, true);
        assert_relative_eq!(o.diameter, 75.0);
        assert_relative_eq!(o.left, 212.5);
        assert_relative_eq!(o.top, 87.5);
        let [cx, cy] = o.center();
        assert_relative_eq!(cx, 250.0);
        assert_relative_eq!(cy, 125.0);
        assert_eq!(o.color, OVERLAY_DETECTED);
        assert_eq!(Overlay::centered(dims, 0.3, false).color, OVERLAY_CLEAR);
    }
}
