use crate::pose::Skeleton;
use crate::posture::{evaluate_skeleton, PostureError, RegionVerdict};

/// 1フレーム分の解析結果
#[derive(Debug, Clone, PartialEq)]
pub enum FrameAnalysis {
    /// 人物が検出されなかった
    NoPerson,
    /// 人物は検出されたが判定に必要な関節が欠けている
    Insufficient {
        skeleton: Skeleton,
        error: PostureError,
    },
    /// 4部位の判定が完了
    Evaluated {
        skeleton: Skeleton,
        verdicts: [RegionVerdict; 4],
    },
}

impl FrameAnalysis {
    pub fn from_detection(detection: Option<Skeleton>) -> Self {
        let Some(skeleton) = detection else {
            return Self::NoPerson;
        };
        match evaluate_skeleton(&skeleton) {
            Ok(verdicts) => Self::Evaluated { skeleton, verdicts },
            Err(error) => Self::Insufficient { skeleton, error },
        }
    }

    /// 描画する骨格 (人物なしなら None)
    pub fn skeleton(&self) -> Option<&Skeleton> {
        match self {
            Self::NoPerson => None,
            Self::Insufficient { skeleton, .. } | Self::Evaluated { skeleton, .. } => Some(skeleton),
        }
    }

    /// 表示する判定結果 (判定できなかったフレームは空)
    pub fn verdicts(&self) -> &[RegionVerdict] {
        match self {
            Self::Evaluated { verdicts, .. } => verdicts.as_slice(),
            _ => &[],
        }
    }
}

/// 1秒ごとの処理状況の集計
#[derive(Debug, Default)]
pub struct FrameStats {
    pub frames: u32,
    pub evaluated: u32,
    pub insufficient: u32,
    /// 推定器がエラーを返したフレーム数
    pub estimation_failures: u32,
}

impl FrameStats {
    pub fn record(&mut self, analysis: &FrameAnalysis) {
        self.frames += 1;
        match analysis {
            FrameAnalysis::NoPerson => {}
            FrameAnalysis::Insufficient { .. } => self.insufficient += 1,
            FrameAnalysis::Evaluated { .. } => self.evaluated += 1,
        }
    }

    pub fn record_estimation_failure(&mut self) {
        self.estimation_failures += 1;
    }

    /// 判定まで完了したフレームの割合
    pub fn evaluated_ratio(&self) -> f32 {
        if self.frames == 0 {
            return 0.0;
        }
        self.evaluated as f32 / self.frames as f32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{decode_single_pose, KeypointIndex, Landmark};
    use crate::posture::{BodyRegion, REQUIRED_KEYPOINTS};

    fn full_upper_body() -> Skeleton {
        REQUIRED_KEYPOINTS
            .iter()
            .map(|idx| (*idx, Landmark::new(0.5, 0.5)))
            .collect()
    }

    #[test]
    fn test_no_detection() {
        let analysis = FrameAnalysis::from_detection(None);
        assert_eq!(analysis, FrameAnalysis::NoPerson);
        assert!(analysis.skeleton().is_none());
        assert!(analysis.verdicts().is_empty());
    }

    #[test]
    fn test_full_detection_is_evaluated() {
        let analysis = FrameAnalysis::from_detection(Some(full_upper_body()));
        let regions: Vec<_> = analysis.verdicts().iter().map(|v| v.region).collect();
        assert_eq!(regions, BodyRegion::ALL.to_vec());
        assert!(analysis.skeleton().is_some());
    }

    #[test]
    fn test_partial_detection_keeps_skeleton_without_verdicts() {
        let mut skeleton = full_upper_body();
        skeleton.remove(KeypointIndex::LeftWrist);

        let analysis = FrameAnalysis::from_detection(Some(skeleton));
        assert!(matches!(analysis, FrameAnalysis::Insufficient { .. }));
        assert!(analysis.verdicts().is_empty());
        assert_eq!(analysis.skeleton().map(|s| s.len()), Some(7));
    }

    #[test]
    fn test_low_score_hips_still_evaluated() {
        let output: Vec<f32> = KeypointIndex::ALL
            .iter()
            .flat_map(|idx| match idx {
                KeypointIndex::LeftHip | KeypointIndex::RightHip => [0.9, 0.5, 0.25],
                _ => [0.5, 0.5, 0.9],
            })
            .collect();

        let analysis = FrameAnalysis::from_detection(decode_single_pose(&output));
        assert_eq!(analysis.verdicts().len(), 4);
        assert_eq!(analysis.skeleton().map(|s| s.len()), Some(KeypointIndex::COUNT));
    }

    #[test]
    fn test_frame_stats() {
        let mut stats = FrameStats::default();
        assert_eq!(stats.evaluated_ratio(), 0.0);

        stats.record(&FrameAnalysis::NoPerson);
        stats.record(&FrameAnalysis::from_detection(Some(full_upper_body())));
        stats.record(&FrameAnalysis::from_detection(Some(Skeleton::default())));
        stats.record(&FrameAnalysis::from_detection(Some(full_upper_body())));

        assert_eq!(stats.frames, 4);
        assert_eq!(stats.evaluated, 2);
        assert_eq!(stats.insufficient, 1);
        assert!((stats.evaluated_ratio() - 0.5).abs() < 1e-6);

        stats.record_estimation_failure();
        assert_eq!(stats.estimation_failures, 1);

        stats.reset();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.estimation_failures, 0);
    }
}
