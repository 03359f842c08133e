use anyhow::{Context, Result};
use ndarray::Array4;
use opencv::{
    core::{AlgorithmHint, Mat, Size, Vec3b},
    imgproc,
    prelude::*,
};

/// MoveNet Lightning の入力解像度
pub const MOVENET_INPUT_SIZE: i32 = 192;

/// カメラの BGR フレームを MoveNet 入力テンソルに変換
///
/// - BGR -> RGB (モデルは RGB 順を期待する)
/// - 192x192 にリサイズ
/// - [1, 192, 192, 3] の f32 テンソル (0.0-255.0)
pub fn preprocess_for_movenet(frame: &Mat) -> Result<Array4<f32>> {
    let mut rgb = Mat::default();
    imgproc::cvt_color(
        frame,
        &mut rgb,
        imgproc::COLOR_BGR2RGB,
        0,
        AlgorithmHint::ALGO_HINT_DEFAULT,
    )
    .context("BGR -> RGB conversion failed")?;

    let mut resized = Mat::default();
    imgproc::resize(
        &rgb,
        &mut resized,
        Size::new(MOVENET_INPUT_SIZE, MOVENET_INPUT_SIZE),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;

    let size = MOVENET_INPUT_SIZE as usize;
    let mut tensor = Array4::<f32>::zeros((1, size, size, 3));

    // resize の出力は連続領域なので行単位で読める
    let pixels = resized.data_typed::<Vec3b>()?;
    for (i, pixel) in pixels.iter().enumerate() {
        let (y, x) = (i / size, i % size);
        for c in 0..3 {
            tensor[[0, y, x, c]] = pixel[c] as f32;
        }
    }

    Ok(tensor)
}
