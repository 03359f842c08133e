/// MoveNet の 17 関節インデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointIndex {
    pub const COUNT: usize = 17;

    pub const ALL: [KeypointIndex; Self::COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// ログ表示用の名前 (LEFT_SHOULDER 形式)
    pub fn name(self) -> &'static str {
        match self {
            Self::Nose => "NOSE",
            Self::LeftEye => "LEFT_EYE",
            Self::RightEye => "RIGHT_EYE",
            Self::LeftEar => "LEFT_EAR",
            Self::RightEar => "RIGHT_EAR",
            Self::LeftShoulder => "LEFT_SHOULDER",
            Self::RightShoulder => "RIGHT_SHOULDER",
            Self::LeftElbow => "LEFT_ELBOW",
            Self::RightElbow => "RIGHT_ELBOW",
            Self::LeftWrist => "LEFT_WRIST",
            Self::RightWrist => "RIGHT_WRIST",
            Self::LeftHip => "LEFT_HIP",
            Self::RightHip => "RIGHT_HIP",
            Self::LeftKnee => "LEFT_KNEE",
            Self::RightKnee => "RIGHT_KNEE",
            Self::LeftAnkle => "LEFT_ANKLE",
            Self::RightAnkle => "RIGHT_ANKLE",
        }
    }
}

/// 単一ランドマーク
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// 正規化されたX座標 (0.0〜1.0)
    pub x: f32,
    /// 正規化されたY座標 (0.0〜1.0)、下向きが正
    pub y: f32,
    /// 奥行き (モデルが出力する場合のみ)
    pub z: Option<f32>,
    /// 信頼度スコア (0.0〜1.0)
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_depth(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// 信頼度が閾値以上か。スコアを持たないランドマークは常に可視
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility.map_or(true, |v| v >= threshold)
    }

    /// ピクセル座標に変換
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        let px = (self.x * width as f32) as i32;
        let py = (self.y * height as f32) as i32;
        (px, py)
    }
}

/// 1人分の検出結果。見つからなかった関節は None
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skeleton {
    landmarks: [Option<Landmark>; KeypointIndex::COUNT],
}

impl Skeleton {
    /// 関節を指定して取得
    pub fn get(&self, index: KeypointIndex) -> Option<&Landmark> {
        self.landmarks[index as usize].as_ref()
    }

    pub fn set(&mut self, index: KeypointIndex, landmark: Landmark) {
        self.landmarks[index as usize] = Some(landmark);
    }

    pub fn remove(&mut self, index: KeypointIndex) -> Option<Landmark> {
        self.landmarks[index as usize].take()
    }

    /// 検出済みの関節を列挙
    pub fn iter(&self) -> impl Iterator<Item = (KeypointIndex, &Landmark)> {
        KeypointIndex::ALL
            .iter()
            .zip(self.landmarks.iter())
            .filter_map(|(idx, lm)| lm.as_ref().map(|lm| (*idx, lm)))
    }

    pub fn len(&self) -> usize {
        self.landmarks.iter().filter(|lm| lm.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(KeypointIndex, Landmark)> for Skeleton {
    fn from_iter<I: IntoIterator<Item = (KeypointIndex, Landmark)>>(iter: I) -> Self {
        let mut skeleton = Skeleton::default();
        for (index, landmark) in iter {
            skeleton.set(index, landmark);
        }
        skeleton
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypoint_index_order_matches_discriminant() {
        for (i, idx) in KeypointIndex::ALL.iter().enumerate() {
            assert_eq!(*idx as usize, i);
        }
    }

    #[test]
    fn test_landmark_is_visible() {
        assert!(Landmark::new(0.5, 0.5).is_visible(0.3));
        assert!(Landmark::new(0.5, 0.5).with_visibility(0.3).is_visible(0.3));
        assert!(!Landmark::new(0.5, 0.5).with_visibility(0.29).is_visible(0.3));
    }

    #[test]
    fn test_landmark_to_pixel() {
        let lm = Landmark::new(0.5, 0.25);
        assert_eq!(lm.to_pixel(1280, 720), (640, 180));
    }

    #[test]
    fn test_skeleton_get_and_remove() {
        let mut skeleton = Skeleton::default();
        assert!(skeleton.is_empty());

        skeleton.set(KeypointIndex::LeftHip, Landmark::new(0.4, 0.6).with_visibility(0.9));
        assert_eq!(skeleton.len(), 1);
        assert_eq!(skeleton.get(KeypointIndex::LeftHip).map(|lm| lm.y), Some(0.6));
        assert!(skeleton.get(KeypointIndex::RightHip).is_none());

        assert!(skeleton.remove(KeypointIndex::LeftHip).is_some());
        assert!(skeleton.is_empty());
    }

    #[test]
    fn test_skeleton_iter_is_index_ordered() {
        let skeleton: Skeleton = [
            (KeypointIndex::RightHip, Landmark::new(0.6, 0.6)),
            (KeypointIndex::Nose, Landmark::new(0.5, 0.1)),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = skeleton.iter().map(|(idx, _)| idx).collect();
        assert_eq!(order, vec![KeypointIndex::Nose, KeypointIndex::RightHip]);
    }
}
