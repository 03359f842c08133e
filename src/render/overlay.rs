use anyhow::Result;
use opencv::{
    core::{self, Mat, Point, Scalar},
    imgproc,
    prelude::*,
};

use crate::analysis::FrameAnalysis;
use crate::pose::Skeleton;
use crate::posture::RegionVerdict;
use crate::render::skeleton::visible_segments;
use crate::render::style::{
    verdict_color, verdict_line_origin, CONNECTION_COLOR, CONNECTION_THICKNESS,
    DRAW_SCORE_THRESHOLD, LANDMARK_COLOR, LANDMARK_RADIUS, TITLE_BANNER_COLOR, TITLE_BANNER_HEIGHT, TITLE_COLOR, TITLE_FONT_SCALE,
    TITLE_ORIGIN, TITLE_TEXT, TITLE_THICKNESS, VERDICT_FONT_SCALE, VERDICT_THICKNESS,
};

fn scalar(bgr: [f64; 3]) -> Scalar {
    Scalar::new(bgr[0], bgr[1], bgr[2], 0.0)
}

/// 信頼度が閾値以上の骨格線と関節を描画
pub fn draw_skeleton(frame: &mut Mat, skeleton: &Skeleton) -> Result<()> {
    let w = frame.cols() as u32;
    let h = frame.rows() as u32;

    for ((x1, y1), (x2, y2)) in visible_segments(skeleton, w, h, DRAW_SCORE_THRESHOLD) {
        imgproc::line(
            frame,
            Point::new(x1, y1),
            Point::new(x2, y2),
            scalar(CONNECTION_COLOR),
            CONNECTION_THICKNESS,
            imgproc::LINE_8,
            0,
        )?;
    }

    for (_, landmark) in skeleton
        .iter()
        .filter(|(_, lm)| lm.is_visible(DRAW_SCORE_THRESHOLD))
    {
        let (px, py) = landmark.to_pixel(w, h);
        imgproc::circle(
            frame,
            Point::new(px, py),
            LANDMARK_RADIUS,
            scalar(LANDMARK_COLOR),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;
    }

    Ok(())
}

/// 判定結果を上から順に1行ずつ描画
pub fn draw_verdicts(frame: &mut Mat, verdicts: &[RegionVerdict]) -> Result<()> {
    for (line, verdict) in verdicts.iter().enumerate() {
        let (x, y) = verdict_line_origin(line);
        imgproc::put_text(
            frame,
            &verdict.to_string(),
            Point::new(x, y),
            imgproc::FONT_HERSHEY_SIMPLEX,
            VERDICT_FONT_SCALE,
            scalar(verdict_color(verdict.is_correct)),
            VERDICT_THICKNESS,
            imgproc::LINE_AA,
            false,
        )?;
    }
    Ok(())
}

/// フレームの上に白いタイトル帯を付けた新しい Mat を返す
pub fn add_title_banner(frame: &Mat) -> Result<Mat> {
    let mut titled = Mat::default();
    core::copy_make_border(
        frame,
        &mut titled,
        TITLE_BANNER_HEIGHT,
        0,
        0,
        0,
        core::BORDER_CONSTANT,
        scalar(TITLE_BANNER_COLOR),
    )?;

    imgproc::put_text(
        &mut titled,
        TITLE_TEXT,
        Point::new(TITLE_ORIGIN.0, TITLE_ORIGIN.1),
        imgproc::FONT_HERSHEY_SIMPLEX,
        TITLE_FONT_SCALE,
        scalar(TITLE_COLOR),
        TITLE_THICKNESS,
        imgproc::LINE_AA,
        false,
    )?;

    Ok(titled)
}

/// 解析結果のオーバーレイを描き、タイトル帯を付けた表示用フレームを返す
pub fn compose_frame(frame: &mut Mat, analysis: &FrameAnalysis) -> Result<Mat> {
    if let Some(skeleton) = analysis.skeleton() {
        draw_skeleton(frame, skeleton)?;
    }
    draw_verdicts(frame, analysis.verdicts())?;
    add_title_banner(frame)
}
