use anyhow::Result;
use cataract_core::{
    AnalysisResult, Analyzer, AppConfig, DecodedImage, ResultsRegion, Session, SessionError,
    Severity, SimulatedAnalyzer, UploadError, UploadedImage, View, ViewState,
};
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use rstest::rstest;
use std::collections::VecDeque;
use std::io::Cursor;
use std::time::{Duration, Instant};

fn png(width: u32, height: u32) -> Result<UploadedImage> {
    let img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba([90, 60, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(UploadedImage::new("eye.png", None, out.into_inner()))
}

/// Hands out results in a fixed order.
struct Scripted(VecDeque<AnalysisResult>);

impl Analyzer for Scripted {
    fn analyze(&mut self, _image: &DecodedImage) -> AnalysisResult {
        self.0.pop_front().expect("script exhausted")
    }
}

const DELAY: Duration = Duration::from_millis(2000);

#[rstest]
#[case(1000, 500, 500.0, 250.0)]
#[case(200, 800, 100.0, 400.0)]
#[case(320, 240, 320.0, 240.0)]
fn upload_scales_preview(
    #[case] w: u32,
    #[case] h: u32,
    #[case] expected_w: f64,
    #[case] expected_h: f64,
) -> Result<()> {
    let mut session = Session::default();
    let dims = session.upload(png(w, h)?)?;
    assert_eq!((dims.width, dims.height), (expected_w, expected_h));
    assert_eq!(session.state(), ViewState::PreviewReady);
    Ok(())
}

#[test]
fn six_megabyte_file_is_rejected_and_session_stays_idle() {
    let mut session = Session::default();
    let big = UploadedImage::new("eye.jpg", Some("image/jpeg"), vec![0; 6 * 1024 * 1024]);
    let err = session.upload(big).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Upload(UploadError::FileTooLarge { .. })
    ));
    assert_eq!(session.state(), ViewState::Idle);
    assert_eq!(session.view(), View::idle());
}

#[test]
fn non_image_is_rejected() {
    let mut session = Session::default();
    let doc = UploadedImage::new("report.pdf", None, b"%PDF-1.7".to_vec());
    let err = session.upload(doc).unwrap_err();
    assert_eq!(err.to_string(), "Please upload an image file (JPEG, PNG)");
    assert_eq!(session.state(), ViewState::Idle);
}

#[test]
fn second_analysis_fully_replaces_first() -> Result<()> {
    let mut session = Session::default();
    session.upload(png(400, 300)?)?;
    let first = AnalysisResult::detected(Severity::Moderate, 72).expect("valid");
    let second = AnalysisResult::clear(93).expect("valid");
    let mut analyzer = Scripted(VecDeque::from([first, second]));

    let t0 = Instant::now();
    session.start_analysis(t0)?;
    session.poll(t0 + DELAY, &mut analyzer);
    let ResultsRegion::Result(first_view) = session.view().results else {
        panic!("first result not shown");
    };
    assert_eq!(first_view.details[1].value, "Moderate");

    let t1 = t0 + DELAY;
    session.start_analysis(t1)?;
    // The previous result stays on screen while the new one is computed.
    assert!(matches!(session.view().results, ResultsRegion::Result(_)));
    session.poll(t1 + DELAY, &mut analyzer);

    let view = session.view();
    let ResultsRegion::Result(second_view) = view.results else {
        panic!("second result not shown");
    };
    assert_eq!(second_view.details.len(), 3);
    assert_eq!(second_view.title, "No Cataract Detected");
    assert_eq!(second_view.details[0].value, "Not Detected");
    assert_eq!(second_view.details[1].value, "None");
    assert_eq!(second_view.details[2].value, "93%");
    assert_eq!(
        view.overlay.map(|o| o.color),
        Some(cataract_core::present::OVERLAY_CLEAR)
    );
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    PreviewReady,
    Analyzing,
    ResultShown,
}

#[rstest]
#[case(Stage::PreviewReady)]
#[case(Stage::Analyzing)]
#[case(Stage::ResultShown)]
fn reset_returns_to_idle_view(#[case] stage: Stage) -> Result<()> {
    let mut session = Session::default();
    let mut analyzer = SimulatedAnalyzer::seeded(3);
    session.upload(png(800, 600)?)?;
    let t0 = Instant::now();
    match stage {
        Stage::PreviewReady => {}
        Stage::Analyzing => {
            session.start_analysis(t0)?;
        }
        Stage::ResultShown => {
            session.start_analysis(t0)?;
            session.poll(t0 + DELAY, &mut analyzer);
            assert_eq!(session.state(), ViewState::ResultShown);
        }
    }

    session.reset();
    assert_eq!(session.state(), ViewState::Idle);
    assert_eq!(session.view(), View::idle());
    assert!(session.result().is_none());
    assert!(session.preview_pixels().is_none());

    // A late timer must not resurrect the results panel.
    assert!(session.poll(t0 + DELAY * 2, &mut analyzer).is_none());
    assert_eq!(session.view(), View::idle());

    // And the session is usable again.
    session.upload(png(50, 50)?)?;
    assert_eq!(session.state(), ViewState::PreviewReady);
    Ok(())
}

#[test]
fn configured_delay_and_bounds_are_honoured() -> Result<()> {
    let cfg = AppConfig::from_toml("analysis_delay_ms = 10\n[preview]\nmax_width = 100\nmax_height = 100\n")?;
    let mut session = Session::new(cfg);
    let dims = session.upload(png(400, 200)?)?;
    assert_eq!((dims.width, dims.height), (100.0, 50.0));

    let t0 = Instant::now();
    session.start_analysis(t0)?;
    let mut analyzer = SimulatedAnalyzer::seeded(11);
    assert!(session.poll(t0 + Duration::from_millis(9), &mut analyzer).is_none());
    let result = session
        .poll(t0 + Duration::from_millis(10), &mut analyzer)
        .expect("result after configured delay");
    assert!((70..=99).contains(&result.confidence()));
    Ok(())
}
