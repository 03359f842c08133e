//! 関節座標から部位ごとの姿勢判定を行う

mod error;
mod evaluator;
mod landmarks;
mod verdict;

pub use error::PostureError;
pub use evaluator::{distance, evaluate, evaluate_skeleton, ALIGNMENT_THRESHOLD};
pub use landmarks::{PostureLandmarks, REQUIRED_KEYPOINTS};
pub use verdict::{BodyRegion, RegionVerdict};
