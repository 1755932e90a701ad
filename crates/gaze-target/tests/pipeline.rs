use approx::assert_relative_eq;

use gaze_target::{
    encode_png, GazePipeline, ObjectDetector, PipelineError, PipelineParams, RawDetection,
    ReplayDetector, RgbFrame,
};

const MARKER_RED: [u8; 3] = [255, 0, 0];

/// Top-down 640x640 frame with a filled red marker dot.
fn frame_with_dot(cx: usize, cy: usize, radius: i32) -> RgbFrame {
    let mut frame = RgbFrame::zeros(640, 640);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx as i32 + dx;
            let y = cy as i32 + dy;
            if (0..640).contains(&x) && (0..640).contains(&y) {
                frame.set_pixel(x as usize, y as usize, MARKER_RED);
            }
        }
    }
    frame
}

/// Square outline covering normalized [0.4, 0.5) in both axes.
fn center_square_polygon() -> Vec<[f32; 2]> {
    vec![[0.4, 0.4], [0.5, 0.4], [0.5, 0.5], [0.4, 0.5]]
}

fn detection(confidence: f32, polygon: Option<Vec<[f32; 2]>>) -> RawDetection {
    RawDetection {
        bbox_xyxy: [256.0, 256.0, 320.0, 320.0],
        class_idx: 41, // "cup"
        confidence,
        polygon,
    }
}

fn top_down_params() -> PipelineParams {
    PipelineParams {
        bottom_up_frames: false,
        ..PipelineParams::default()
    }
}

fn pipeline_with(detections: Vec<RawDetection>, params: PipelineParams) -> GazePipeline {
    GazePipeline::new(Box::new(ReplayDetector::new(detections)), params)
}

#[test]
fn resolves_target_under_gaze_dot() {
    let frame = frame_with_dot(300, 300, 5);
    let pipeline = pipeline_with(
        vec![detection(0.9, Some(center_square_polygon()))],
        top_down_params(),
    );

    let result = pipeline.process_raw(frame.data).unwrap();
    assert_eq!((result.gaze.x, result.gaze.y), (300, 300));
    assert_eq!(result.target_index, 0);
    assert_eq!(result.class_idx, 41);
    assert_relative_eq!(result.confidence, 0.9);

    // The square spans pixels 256..=319 in both axes.
    assert_eq!((result.region.min_x, result.region.max_x), (256, 319));
    assert_eq!((result.region.min_y, result.region.max_y), (256, 319));
    assert_eq!((result.image.width, result.image.height), (64, 64));

    // Gaze pixel survives compositing with its original channels.
    assert_eq!(result.image.pixel(300 - 256, 300 - 256), MARKER_RED);
}

#[test]
fn low_confidence_detection_yields_no_detections() {
    let frame = frame_with_dot(300, 300, 5);
    let pipeline = pipeline_with(
        vec![detection(0.10, Some(center_square_polygon()))],
        top_down_params(),
    );
    assert!(matches!(
        pipeline.process_raw(frame.data),
        Err(PipelineError::NoDetections)
    ));
}

#[test]
fn box_only_detections_yield_no_detections() {
    let frame = frame_with_dot(300, 300, 5);
    let pipeline = pipeline_with(vec![detection(0.9, None)], top_down_params());
    assert!(matches!(
        pipeline.process_raw(frame.data),
        Err(PipelineError::NoDetections)
    ));
}

#[test]
fn frame_without_marker_yields_gaze_not_found() {
    let frame = RgbFrame::zeros(640, 640);
    let pipeline = pipeline_with(
        vec![detection(0.9, Some(center_square_polygon()))],
        top_down_params(),
    );
    assert!(matches!(
        pipeline.process_raw(frame.data),
        Err(PipelineError::GazeNotFound)
    ));
}

#[test]
fn gaze_outside_every_mask_yields_no_target() {
    let frame = frame_with_dot(100, 100, 5);
    let pipeline = pipeline_with(
        vec![detection(0.9, Some(center_square_polygon()))],
        top_down_params(),
    );
    match pipeline.process_raw(frame.data) {
        Err(PipelineError::NoTarget { x, y }) => assert_eq!((x, y), (100, 100)),
        other => panic!("expected NoTarget, got {other:?}"),
    }
}

#[test]
fn malformed_buffer_is_rejected_before_any_stage() {
    let pipeline = pipeline_with(vec![], top_down_params());
    match pipeline.process_raw(vec![0u8; 123]) {
        Err(PipelineError::InputShape { expected, got }) => {
            assert_eq!(expected, 640 * 640 * 3);
            assert_eq!(got, 123);
        }
        other => panic!("expected InputShape, got {other:?}"),
    }
}

#[test]
fn first_listed_detection_wins_overlap_regardless_of_confidence() {
    let frame = frame_with_dot(300, 300, 5);
    let pipeline = pipeline_with(
        vec![
            detection(0.2, Some(center_square_polygon())),
            detection(0.95, Some(center_square_polygon())),
        ],
        top_down_params(),
    );
    let result = pipeline.process_raw(frame.data).unwrap();
    assert_eq!(result.target_index, 0);
    assert_relative_eq!(result.confidence, 0.2);
}

#[test]
fn bottom_up_buffers_are_normalized_before_both_stages() {
    // Simulate a bottom-up capture of a dot at (300, 300): draw top-down,
    // then reverse the row order. The single ingest flip must restore it
    // inside the center-square mask for both the locator and the resolver.
    let mut frame = frame_with_dot(300, 300, 5);
    frame.flip_vertical();
    let pipeline = pipeline_with(
        vec![detection(0.9, Some(center_square_polygon()))],
        PipelineParams::default(), // bottom_up_frames = true
    );
    let result = pipeline.process_raw(frame.data).unwrap();
    assert_eq!((result.gaze.x, result.gaze.y), (300, 300));
}

#[test]
fn detector_failure_surfaces_as_distinct_error() {
    struct FailingDetector;
    impl ObjectDetector for FailingDetector {
        fn detect(
            &self,
            _frame: &gaze_target::RgbFrameView<'_>,
        ) -> Result<Vec<RawDetection>, gaze_target::DetectorError> {
            Err("model backend unavailable".into())
        }
    }

    let frame = frame_with_dot(300, 300, 5);
    let pipeline = GazePipeline::new(Box::new(FailingDetector), top_down_params());
    assert!(matches!(
        pipeline.process_raw(frame.data),
        Err(PipelineError::Detector(_))
    ));
}

#[test]
fn masked_crop_encodes_to_png() {
    let frame = frame_with_dot(300, 300, 5);
    let pipeline = pipeline_with(
        vec![detection(0.9, Some(center_square_polygon()))],
        top_down_params(),
    );
    let result = pipeline.process_raw(frame.data).unwrap();
    let png = encode_png(&result.image).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!((decoded.width(), decoded.height()), (64, 64));
    assert_eq!(decoded.get_pixel(300 - 256, 300 - 256).0, MARKER_RED);
}
