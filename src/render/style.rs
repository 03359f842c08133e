//! オーバーレイの配色とレイアウト。色は OpenCV と同じ BGR 順

/// 判定 OK の文字色 (緑)
pub const CORRECT_COLOR: [f64; 3] = [0.0, 255.0, 0.0];
/// 判定 NG の文字色 (赤)
pub const INCORRECT_COLOR: [f64; 3] = [0.0, 0.0, 255.0];

/// これ未満の信頼度の関節と骨格線は描画しない
pub const DRAW_SCORE_THRESHOLD: f32 = 0.3;

/// 関節の点 (緑, 半径3)
pub const LANDMARK_COLOR: [f64; 3] = [0.0, 255.0, 0.0];
pub const LANDMARK_RADIUS: i32 = 3;
/// 骨格線 (赤, 太さ2)
pub const CONNECTION_COLOR: [f64; 3] = [0.0, 0.0, 255.0];
pub const CONNECTION_THICKNESS: i32 = 2;

/// 判定テキストの1行目の位置と行送り
pub const VERDICT_ORIGIN: (i32, i32) = (50, 50);
pub const VERDICT_LINE_STEP: i32 = 30;
pub const VERDICT_FONT_SCALE: f64 = 0.8;
pub const VERDICT_THICKNESS: i32 = 2;

/// フレーム上部のタイトル帯
pub const TITLE_TEXT: &str = "Posture Detection using Mediapipe & OpenCV";
pub const TITLE_BANNER_HEIGHT: i32 = 80;
pub const TITLE_BANNER_COLOR: [f64; 3] = [255.0, 255.0, 255.0];
pub const TITLE_ORIGIN: (i32, i32) = (200, 50);
pub const TITLE_FONT_SCALE: f64 = 2.0;
pub const TITLE_THICKNESS: i32 = 3;
pub const TITLE_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

/// 表示ウィンドウのタイトル
pub const WINDOW_TITLE: &str = "Posture Detection";

pub fn verdict_color(is_correct: bool) -> [f64; 3] {
    if is_correct {
        CORRECT_COLOR
    } else {
        INCORRECT_COLOR
    }
}

/// n 行目 (0始まり) の判定テキストの左下座標
pub fn verdict_line_origin(line: usize) -> (i32, i32) {
    (
        VERDICT_ORIGIN.0,
        VERDICT_ORIGIN.1 + VERDICT_LINE_STEP * line as i32,
    )
}

/// BGR を minifb の 0RGB に詰める
pub fn pack_bgr(b: u8, g: u8, r: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
