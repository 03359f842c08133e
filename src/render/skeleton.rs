use crate::pose::{KeypointIndex, Skeleton};

/// 骨格の接続定義 (開始キーポイント, 終了キーポイント)
pub const SKELETON_CONNECTIONS: [(KeypointIndex, KeypointIndex); 16] = [
    // 顔
    (KeypointIndex::LeftEar, KeypointIndex::LeftEye),
    (KeypointIndex::LeftEye, KeypointIndex::Nose),
    (KeypointIndex::Nose, KeypointIndex::RightEye),
    (KeypointIndex::RightEye, KeypointIndex::RightEar),
    // 上半身
    (KeypointIndex::LeftShoulder, KeypointIndex::RightShoulder),
    (KeypointIndex::LeftShoulder, KeypointIndex::LeftElbow),
    (KeypointIndex::LeftElbow, KeypointIndex::LeftWrist),
    (KeypointIndex::RightShoulder, KeypointIndex::RightElbow),
    (KeypointIndex::RightElbow, KeypointIndex::RightWrist),
    // 胴体
    (KeypointIndex::LeftShoulder, KeypointIndex::LeftHip),
    (KeypointIndex::RightShoulder, KeypointIndex::RightHip),
    (KeypointIndex::LeftHip, KeypointIndex::RightHip),
    // 下半身
    (KeypointIndex::LeftHip, KeypointIndex::LeftKnee),
    (KeypointIndex::LeftKnee, KeypointIndex::LeftAnkle),
    (KeypointIndex::RightHip, KeypointIndex::RightKnee),
    (KeypointIndex::RightKnee, KeypointIndex::RightAnkle),
];

/// 両端が検出済みかつ信頼度が閾値以上の接続のピクセル座標を列挙
pub fn visible_segments(
    skeleton: &Skeleton,
    width: u32,
    height: u32,
    threshold: f32,
) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
    SKELETON_CONNECTIONS.iter().filter_map(move |(start, end)| {
        let start = skeleton.get(*start).filter(|lm| lm.is_visible(threshold))?;
        let end = skeleton.get(*end).filter(|lm| lm.is_visible(threshold))?;
        Some((start.to_pixel(width, height), end.to_pixel(width, height)))
    })
}
