//! # 图层渲染
//!
//! 把画布按活动图层派生为显示图像——纯函数，自身不持有任何缓冲，
//! 每次画布变更或切层后由调用方重新派生，杜绝两份像素数据漂移。
//!
//! - 基础地形视图：逐格照搬地形色
//! - 海拔视图：海水格用固定海水色，陆地格映射为灰度
//!   `[MIN_SHADE, MAX_SHADE]`（线性，四舍五入）

use egui::{Color32, ColorImage};
use rayon::prelude::*;

use crate::core::canvas::Canvas;
use crate::core::color::{self, ColorRgb};
use crate::core::layer::ActiveLayer;

/// 海拔 0 对应的灰度
pub const MIN_SHADE: u8 = 48;
/// 海拔 255 对应的灰度
pub const MAX_SHADE: u8 = 235;

/// 海拔值 → 灰度。
pub fn shade_for_elevation(elevation: u8) -> u8 {
    let span = (MAX_SHADE - MIN_SHADE) as u32;
    MIN_SHADE + ((elevation as u32 * span + 127) / 255) as u8
}

fn to_color32(c: ColorRgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// 将画布转换为颜色图像（rayon 按行并行）。
pub fn canvas_to_color_image(canvas: &Canvas, layer: ActiveLayer) -> ColorImage {
    let w = canvas.width() as usize;
    let h = canvas.height() as usize;
    let terrain = canvas.terrain();
    let elevation = canvas.elevation();

    let mut pixels = vec![Color32::TRANSPARENT; w * h];

    pixels.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let row_start = y * w;
        for x in 0..w {
            let i = row_start + x;
            row[x] = match layer {
                ActiveLayer::BaseTerrain => to_color32(terrain[i]),
                ActiveLayer::Elevation => {
                    if terrain[i] == color::WATER {
                        to_color32(color::WATER)
                    } else {
                        Color32::from_gray(shade_for_elevation(elevation[i]))
                    }
                }
            };
        }
    });

    ColorImage {
        size: [w, h],
        pixels,
    }
}
