//! Run the gaze-target pipeline on a captured frame with replayed
//! detections.
//!
//! Usage: gaze_replay <frame.png> <detections.json> [out.png]

use gaze_target::{encode_png, GazePipeline, PipelineParams, ReplayDetector, RgbFrame};

#[cfg(feature = "tracing")]
use gaze_target::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false);
    #[cfg(not(feature = "tracing"))]
    let _ = gaze_target::core::init_with_level(log::LevelFilter::Debug);

    let mut args = std::env::args().skip(1);
    let (Some(frame_path), Some(json_path)) = (args.next(), args.next()) else {
        eprintln!("Usage: gaze_replay <frame.png> <detections.json> [out.png]");
        return Ok(());
    };
    let out_path = args.next().unwrap_or_else(|| "target.png".to_string());

    let img = image::ImageReader::open(&frame_path)?.decode()?.to_rgb8();
    let frame = RgbFrame::from_raw(
        img.width() as usize,
        img.height() as usize,
        img.into_raw(),
    )?;

    let detector = ReplayDetector::from_json(&std::fs::read_to_string(&json_path)?)?;
    let params = PipelineParams {
        frame_width: frame.width,
        frame_height: frame.height,
        bottom_up_frames: false, // PNG rows are already top-down
        ..PipelineParams::default()
    };
    let pipeline = GazePipeline::new(Box::new(detector), params);

    match pipeline.process_frame(&frame) {
        Ok(result) => {
            println!(
                "target index {} at gaze ({}, {}), crop {}x{}",
                result.target_index,
                result.gaze.x,
                result.gaze.y,
                result.image.width,
                result.image.height
            );
            std::fs::write(&out_path, encode_png(&result.image)?)?;
            println!("wrote {out_path}");
        }
        Err(err) => println!("no result: {err}"),
    }

    Ok(())
}
