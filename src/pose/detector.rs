use anyhow::{Context, Result};
use opencv::core::Mat;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;

use super::keypoint::Skeleton;
use super::movenet::decode_single_pose;
use super::preprocess::preprocess_for_movenet;

/// 画像から1人分のスケルトンを推定する外部モデル
///
/// 起動時に1度だけ生成し、フレームループへ参照で渡す
pub trait PoseEstimator {
    /// BGR フレームを受け取り、人物がいなければ None を返す
    fn estimate(&mut self, frame: &Mat) -> Result<Option<Skeleton>>;
}

/// MoveNet SinglePose (ONNX) による推定器
pub struct MoveNetDetector {
    session: Session,
}

impl MoveNetDetector {
    const INPUT_NAME: &'static str = "serving_default_input_0";
    const OUTPUT_NAME: &'static str = "StatefulPartitionedCall_0";

    /// ONNXモデルを読み込んで初期化
    pub fn new<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let model_path = model_path.as_ref();
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model {}", model_path.display()))?;

        Ok(Self { session })
    }
}

impl PoseEstimator for MoveNetDetector {
    fn estimate(&mut self, frame: &Mat) -> Result<Option<Skeleton>> {
        let input = preprocess_for_movenet(frame)?;
        let input_tensor = Tensor::from_array(input)?;
        let outputs = self
            .session
            .run(ort::inputs![Self::INPUT_NAME => input_tensor])
            .context("Inference failed")?;

        // 出力は [1, 1, 17, 3] (y, x, score)
        let output: ndarray::ArrayViewD<f32> = outputs[Self::OUTPUT_NAME]
            .try_extract_array()
            .context("Failed to extract output tensor")?;

        let values: Vec<f32> = output.iter().copied().collect();
        Ok(decode_single_pose(&values))
    }
}
