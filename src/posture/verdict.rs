use std::fmt;

/// 判定対象の部位。並び順は画面の表示順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRegion {
    Shoulders,
    LeftArm,
    RightArm,
    Hips,
}

impl BodyRegion {
    pub const ALL: [BodyRegion; 4] = [
        Self::Shoulders,
        Self::LeftArm,
        Self::RightArm,
        Self::Hips,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Shoulders => "Shoulders",
            Self::LeftArm => "Left Arm",
            Self::RightArm => "Right Arm",
            Self::Hips => "Hips",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 1部位・1フレーム分の判定結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionVerdict {
    pub region: BodyRegion,
    pub is_correct: bool,
    /// 正規化座標でのユークリッド距離
    pub distance: f32,
}

impl RegionVerdict {
    pub fn verdict_label(&self) -> &'static str {
        if self.is_correct {
            "Correct"
        } else {
            "Incorrect"
        }
    }
}

/// オーバーレイに表示する1行 (例: `Hips: Correct, Distance: 0.16`)
impl fmt::Display for RegionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Distance: {:.2}",
            self.region,
            self.verdict_label(),
            self.distance
        )
    }
}
