use super::keypoint::{KeypointIndex, Landmark, Skeleton};

/// 1関節あたりの出力値 (y, x, score)
pub const VALUES_PER_KEYPOINT: usize = 3;

/// 全関節の平均スコアがこれ未満なら人物なしとみなす
pub const PERSON_SCORE_THRESHOLD: f32 = 0.2;

/// MoveNet SinglePose の出力 [1, 1, 17, 3] をスケルトンに変換
///
/// `output` は平坦化した 51 要素。人物が見つからない場合は None。
/// 人物がいれば17関節すべてをスコア付きで返す
pub fn decode_single_pose(output: &[f32]) -> Option<Skeleton> {
    if output.len() < KeypointIndex::COUNT * VALUES_PER_KEYPOINT {
        return None;
    }

    let rows = output
        .chunks_exact(VALUES_PER_KEYPOINT)
        .take(KeypointIndex::COUNT);

    let mean_score = rows.clone().map(|v| v[2]).sum::<f32>() / KeypointIndex::COUNT as f32;
    if mean_score < PERSON_SCORE_THRESHOLD {
        return None;
    }

    let skeleton: Skeleton = KeypointIndex::ALL
        .iter()
        .zip(rows)
        .map(|(idx, v)| (*idx, Landmark::new(v[1], v[0]).with_visibility(v[2])))
        .collect();

    Some(skeleton)
}
