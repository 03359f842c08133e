use anyhow::{Context, Result};
use opencv::{
    core::{Mat, Size},
    imgproc,
    prelude::*,
    videoio::{self, VideoCapture, VideoCaptureAPIs},
};

/// 検出・表示に使うフレーム幅
pub const FRAME_WIDTH: i32 = 1280;
/// 検出・表示に使うフレーム高さ
pub const FRAME_HEIGHT: i32 = 720;

/// OpenCVを使用したカメラキャプチャ
///
/// Drop 時にデバイスを解放する
pub struct OpenCvCamera {
    capture: VideoCapture,
    index: i32,
}

impl OpenCvCamera {
    /// カメラを開く（デフォルトカメラ: index 0）
    pub fn open(index: i32) -> Result<Self> {
        let capture = VideoCapture::new(index, VideoCaptureAPIs::CAP_ANY as i32)
            .context("Failed to open camera")?;

        if !capture.is_opened()? {
            anyhow::bail!("Camera {} is not available", index);
        }

        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)?;
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?;
        let fps = capture.get(videoio::CAP_PROP_FPS)?;
        tracing::info!("Camera {}: {}x{} @ {} fps", index, width, height, fps);

        Ok(Self { capture, index })
    }

    /// フレームを読み込む（BGR形式、デバイスの解像度のまま）
    pub fn read_frame(&mut self) -> Result<Mat> {
        let mut frame = Mat::default();
        let grabbed = self
            .capture
            .read(&mut frame)
            .context("Failed to read frame")?;

        if !grabbed || frame.empty() {
            anyhow::bail!("Camera {} stopped producing frames", self.index);
        }

        Ok(frame)
    }

    /// フレームを読み込み FRAME_WIDTH x FRAME_HEIGHT にリサイズする
    pub fn read_resized(&mut self) -> Result<Mat> {
        let frame = self.read_frame()?;
        let mut resized = Mat::default();
        imgproc::resize(
            &frame,
            &mut resized,
            Size::new(FRAME_WIDTH, FRAME_HEIGHT),
            0.0,
            0.0,
            imgproc::INTER_LINEAR,
        )?;
        Ok(resized)
    }
}

impl Drop for OpenCvCamera {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            tracing::warn!("Failed to release camera {}: {}", self.index, e);
        } else {
            tracing::debug!("Camera {} released", self.index);
        }
    }
}
