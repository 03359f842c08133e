use crate::pose::{Landmark, Skeleton};

use super::error::PostureError;
use super::landmarks::PostureLandmarks;
use super::verdict::{BodyRegion, RegionVerdict};

/// 左右の高さの差がこれ未満なら水平とみなす (正規化座標)
pub const ALIGNMENT_THRESHOLD: f32 = 0.1;

/// 2点間の平面距離。z と visibility は使わない
///
/// x と y はそれぞれ画像の幅・高さで正規化されているため、
/// 正方形でないフレームでは物理的な距離に比例しない
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

fn is_level(left: &Landmark, right: &Landmark) -> bool {
    (left.y - right.y).abs() < ALIGNMENT_THRESHOLD
}

/// 肘が肩より下にあるか (画像の y は下向きが正)
fn is_arm_lowered(shoulder: &Landmark, elbow: &Landmark) -> bool {
    elbow.y > shoulder.y
}

/// 4部位を [Shoulders, Left Arm, Right Arm, Hips] の順で判定
pub fn evaluate(lm: &PostureLandmarks) -> [RegionVerdict; 4] {
    [
        RegionVerdict {
            region: BodyRegion::Shoulders,
            is_correct: is_level(&lm.left_shoulder, &lm.right_shoulder),
            distance: distance(&lm.left_shoulder, &lm.right_shoulder),
        },
        RegionVerdict {
            region: BodyRegion::LeftArm,
            is_correct: is_arm_lowered(&lm.left_shoulder, &lm.left_elbow),
            distance: distance(&lm.left_elbow, &lm.left_wrist),
        },
        RegionVerdict {
            region: BodyRegion::RightArm,
            is_correct: is_arm_lowered(&lm.right_shoulder, &lm.right_elbow),
            distance: distance(&lm.right_elbow, &lm.right_wrist),
        },
        RegionVerdict {
            region: BodyRegion::Hips,
            is_correct: is_level(&lm.left_hip, &lm.right_hip),
            distance: distance(&lm.left_hip, &lm.right_hip),
        },
    ]
}

/// 検出結果から直接判定する。必要な関節が欠けていればエラー
pub fn evaluate_skeleton(skeleton: &Skeleton) -> Result<[RegionVerdict; 4], PostureError> {
    let landmarks = PostureLandmarks::try_from(skeleton)?;
    Ok(evaluate(&landmarks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::KeypointIndex;

    const EPS: f32 = 1e-4;

    fn standing() -> PostureLandmarks {
        PostureLandmarks {
            left_shoulder: Landmark::new(0.40, 0.30),
            right_shoulder: Landmark::new(0.60, 0.30),
            left_elbow: Landmark::new(0.35, 0.50),
            left_wrist: Landmark::new(0.30, 0.70),
            right_elbow: Landmark::new(0.65, 0.50),
            right_wrist: Landmark::new(0.70, 0.70),
            left_hip: Landmark::new(0.42, 0.60),
            right_hip: Landmark::new(0.58, 0.62),
        }
    }

    fn to_skeleton(lm: &PostureLandmarks) -> Skeleton {
        [
            (KeypointIndex::LeftShoulder, lm.left_shoulder),
            (KeypointIndex::RightShoulder, lm.right_shoulder),
            (KeypointIndex::LeftElbow, lm.left_elbow),
            (KeypointIndex::RightElbow, lm.right_elbow),
            (KeypointIndex::LeftWrist, lm.left_wrist),
            (KeypointIndex::RightWrist, lm.right_wrist),
            (KeypointIndex::LeftHip, lm.left_hip),
            (KeypointIndex::RightHip, lm.right_hip),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_distance_symmetric_and_zero() {
        let a = Landmark::new(0.1, 0.9);
        let b = Landmark::new(0.7, 0.2).with_depth(-0.5).with_visibility(0.4);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0).with_depth(10.0);
        let b = Landmark::new(0.3, 0.4);
        assert!((distance(&a, &b) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_standing_scenario() {
        let verdicts = evaluate(&standing());

        let regions: Vec<_> = verdicts.iter().map(|v| v.region).collect();
        assert_eq!(regions, BodyRegion::ALL.to_vec());
        assert!(verdicts.iter().all(|v| v.is_correct));

        assert!((verdicts[0].distance - 0.20).abs() < EPS);
        // sqrt(0.05^2 + 0.20^2)
        assert!((verdicts[1].distance - 0.2062).abs() < EPS);
        assert!((verdicts[2].distance - 0.2062).abs() < EPS);
        // sqrt(0.16^2 + 0.02^2)
        assert!((verdicts[3].distance - 0.1612).abs() < EPS);
    }

    #[test]
    fn test_tilted_hips() {
        let mut lm = standing();
        lm.left_hip = Landmark::new(0.42, 0.40);
        lm.right_hip = Landmark::new(0.58, 0.65);

        let hips = evaluate(&lm)[3];
        assert_eq!(hips.region, BodyRegion::Hips);
        assert!(!hips.is_correct);
        assert!((hips.distance - 0.2968).abs() < EPS);
    }

    #[test]
    fn test_shoulder_alignment_threshold() {
        let mut lm = standing();
        lm.right_shoulder.y = lm.left_shoulder.y;
        assert!(evaluate(&lm)[0].is_correct);

        lm.right_shoulder.y = lm.left_shoulder.y + 0.15;
        assert!(!evaluate(&lm)[0].is_correct);

        lm.right_shoulder.y = lm.left_shoulder.y - 0.25;
        assert!(!evaluate(&lm)[0].is_correct);

        lm.right_shoulder.y = lm.left_shoulder.y + 0.05;
        assert!(evaluate(&lm)[0].is_correct);
    }

    #[test]
    fn test_alignment_exactly_at_threshold_is_incorrect() {
        let mut lm = standing();
        lm.left_shoulder.y = 0.0;
        lm.right_shoulder.y = ALIGNMENT_THRESHOLD;
        lm.left_hip.y = ALIGNMENT_THRESHOLD;
        lm.right_hip.y = 0.0;

        let verdicts = evaluate(&lm);
        assert!(!verdicts[0].is_correct);
        assert!(!verdicts[3].is_correct);
    }

    #[test]
    fn test_raised_arm_is_incorrect() {
        let mut lm = standing();
        lm.left_elbow.y = 0.2;
        let verdicts = evaluate(&lm);
        assert!(!verdicts[1].is_correct);
        assert!(verdicts[2].is_correct);

        lm.right_elbow.y = 0.1;
        assert!(!evaluate(&lm)[2].is_correct);
    }

    #[test]
    fn test_elbow_level_with_shoulder_is_incorrect() {
        let mut lm = standing();
        lm.left_elbow.y = lm.left_shoulder.y;
        assert!(!evaluate(&lm)[1].is_correct);

        let mut lm = standing();
        lm.right_elbow.y = lm.right_shoulder.y;
        let verdicts = evaluate(&lm);
        assert!(!verdicts[2].is_correct);
        assert!(verdicts[1].is_correct);
    }

    #[test]
    fn test_evaluate_skeleton() {
        let verdicts = evaluate_skeleton(&to_skeleton(&standing())).unwrap();
        assert_eq!(verdicts.len(), 4);
        assert_eq!(verdicts, evaluate(&standing()));
    }

    #[test]
    fn test_evaluate_skeleton_missing_right_hip() {
        let mut skeleton = to_skeleton(&standing());
        skeleton.remove(KeypointIndex::RightHip);

        let err = evaluate_skeleton(&skeleton).unwrap_err();
        assert_eq!(
            err,
            PostureError::InsufficientLandmarks {
                missing: vec![KeypointIndex::RightHip],
            }
        );
    }
}
