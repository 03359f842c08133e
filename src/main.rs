use anyhow::Result;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use posture_detection::analysis::{FrameAnalysis, FrameStats};
use posture_detection::camera::{OpenCvCamera, FRAME_HEIGHT, FRAME_WIDTH};
use posture_detection::config::Config;
use posture_detection::pose::{MoveNetDetector, PoseEstimator};
use posture_detection::render::style::{TITLE_BANNER_HEIGHT, WINDOW_TITLE};
use posture_detection::render::{compose_frame, MinifbRenderer};

const CONFIG_PATH: &str = "posture.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_or_default(CONFIG_PATH);

    tracing::info!("Opening camera {}...", config.camera.index);
    let mut camera = OpenCvCamera::open(config.camera.index)?;

    tracing::info!("Loading model from {}...", config.model.path);
    let mut detector = MoveNetDetector::new(&config.model.path)?;

    let mut renderer = MinifbRenderer::new(
        WINDOW_TITLE,
        FRAME_WIDTH as usize,
        (FRAME_HEIGHT + TITLE_BANNER_HEIGHT) as usize,
    )?;
    tracing::info!("Press Q to exit");

    run(&mut camera, &mut detector, &mut renderer)?;

    tracing::info!("Shutting down...");
    Ok(())
}

/// キャプチャ → 推定 → 判定 → 描画 のメインループ
///
/// カメラがフレームを返さなくなるか、ウィンドウが閉じられると終了する
fn run(
    camera: &mut OpenCvCamera,
    detector: &mut impl PoseEstimator,
    renderer: &mut MinifbRenderer,
) -> Result<()> {
    let mut stats = FrameStats::default();
    let mut stats_timer = Instant::now();
    let mut estimation_warned = false;

    while renderer.is_open() {
        let mut frame = match camera.read_resized() {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Capture ended: {:#}", e);
                break;
            }
        };

        let detection = match detector.estimate(&frame) {
            Ok(d) => d,
            Err(e) => {
                // 警告は初回のみ、以降は debug
                if !estimation_warned {
                    tracing::warn!("Pose estimation failed: {:#}", e);
                    estimation_warned = true;
                } else {
                    tracing::debug!("Pose estimation failed: {:#}", e);
                }
                stats.record_estimation_failure();
                None
            }
        };

        let analysis = FrameAnalysis::from_detection(detection);
        if let FrameAnalysis::Insufficient { error, .. } = &analysis {
            tracing::debug!("Skipping overlay: {}", error);
        }

        match compose_frame(&mut frame, &analysis) {
            Ok(titled) => renderer.draw_frame(&titled)?,
            Err(e) => {
                tracing::warn!("Skipping overlay: {:#}", e);
                renderer.draw_frame(&frame)?;
            }
        }
        renderer.update()?;

        stats.record(&analysis);
        let elapsed = stats_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            tracing::info!(
                "FPS: {:.1}, evaluated: {:.0}%, insufficient: {}, estimation errors: {}",
                stats.frames as f32 / elapsed,
                stats.evaluated_ratio() * 100.0,
                stats.insufficient,
                stats.estimation_failures
            );
            stats.reset();
            stats_timer = Instant::now();
        }
    }

    Ok(())
}
