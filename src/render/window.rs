use anyhow::{Context, Result};
use minifb::{Key, Window, WindowOptions};
use opencv::core::{Mat, Vec3b};
use opencv::prelude::*;

use crate::render::style::pack_bgr;

/// 終了キー
pub const QUIT_KEY: Key = Key::Q;

/// minifbを使用した表示ウィンドウ
///
/// ウィンドウは Drop 時に閉じる
pub struct MinifbRenderer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    /// ウィンドウを作成
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .context("Failed to create window")?;

        Ok(Self {
            window,
            buffer: vec![0u32; width * height],
            width,
            height,
        })
    }

    /// ウィンドウが開いていて終了キーが押されていないか
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(QUIT_KEY)
    }

    /// BGR Mat をバッファにコピー（はみ出す部分は切り捨て）
    pub fn draw_frame(&mut self, frame: &Mat) -> Result<()> {
        let frame_width = frame.cols() as usize;
        let frame_height = frame.rows() as usize;

        for y in 0..self.height.min(frame_height) {
            for x in 0..self.width.min(frame_width) {
                let pixel = frame.at_2d::<Vec3b>(y as i32, x as i32)?;
                self.buffer[y * self.width + x] = pack_bgr(pixel[0], pixel[1], pixel[2]);
            }
        }

        Ok(())
    }

    /// バッファをウィンドウに表示し、キー入力を処理する
    pub fn update(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }
}
