use thiserror::Error;

use crate::pose::KeypointIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostureError {
    /// 判定に必要な関節が検出結果に含まれていない
    #[error("insufficient landmarks: missing {}", join_names(.missing))]
    InsufficientLandmarks { missing: Vec<KeypointIndex> },
}

fn join_names(indices: &[KeypointIndex]) -> String {
    indices
        .iter()
        .map(|idx| idx.name())
        .collect::<Vec<_>>()
        .join(", ")
}
