use crate::pose::{KeypointIndex, Landmark, Skeleton};

use super::error::PostureError;

/// 判定に使う関節 (この順で欠落を報告する)
pub const REQUIRED_KEYPOINTS: [KeypointIndex; 8] = [
    KeypointIndex::LeftShoulder,
    KeypointIndex::RightShoulder,
    KeypointIndex::LeftElbow,
    KeypointIndex::RightElbow,
    KeypointIndex::LeftWrist,
    KeypointIndex::RightWrist,
    KeypointIndex::LeftHip,
    KeypointIndex::RightHip,
];

/// 姿勢判定に必要な8関節
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureLandmarks {
    pub left_shoulder: Landmark,
    pub right_shoulder: Landmark,
    pub left_elbow: Landmark,
    pub right_elbow: Landmark,
    pub left_wrist: Landmark,
    pub right_wrist: Landmark,
    pub left_hip: Landmark,
    pub right_hip: Landmark,
}

impl TryFrom<&Skeleton> for PostureLandmarks {
    type Error = PostureError;

    fn try_from(skeleton: &Skeleton) -> Result<Self, Self::Error> {
        let found = REQUIRED_KEYPOINTS.map(|idx| skeleton.get(idx).copied());

        match found {
            [
                Some(left_shoulder),
                Some(right_shoulder),
                Some(left_elbow),
                Some(right_elbow),
                Some(left_wrist),
                Some(right_wrist),
                Some(left_hip),
                Some(right_hip),
            ] => Ok(Self {
                left_shoulder,
                right_shoulder,
                left_elbow,
                right_elbow,
                left_wrist,
                right_wrist,
                left_hip,
                right_hip,
            }),
            _ => {
                let missing = REQUIRED_KEYPOINTS
                    .iter()
                    .zip(found.iter())
                    .filter(|(_, lm)| lm.is_none())
                    .map(|(idx, _)| *idx)
                    .collect();
                Err(PostureError::InsufficientLandmarks { missing })
            }
        }
    }
}
