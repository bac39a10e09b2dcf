//! # 圆形笔刷光栅化
//!
//! 唯一的圆盘枚举算法，通过逐格回调参数化：地形笔刷写色、
//! 海拔笔刷加减高度共用同一个包含判定。
//!
//! 包含判定为 `dx*dx + dy*dy <= r*r`（r = 直径/2 向下取整），
//! 小半径下圆盘呈块状——这是刻意保留的形状，逐格可复现。

use crate::core::canvas::Canvas;
use crate::core::color::ColorRgb;

/// 海拔笔刷单次标记的高度增量
pub const ELEVATION_STEP: i32 = 4;

/// 海拔笔刷方向，由触发笔划的指针键决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationDirection {
    Raise,
    Lower,
}

impl ElevationDirection {
    pub fn delta(self) -> i32 {
        match self {
            Self::Raise => ELEVATION_STEP,
            Self::Lower => -ELEVATION_STEP,
        }
    }
}

/// 枚举圆盘内的所有格并调用 `apply`。
///
/// 遍历外接正方形，不做任何边界过滤——越界裁剪是 Canvas 的职责。
pub fn for_each_disc_cell(
    center_x: i32,
    center_y: i32,
    brush_size: u32,
    mut apply: impl FnMut(i32, i32),
) {
    let radius = (brush_size / 2) as i32;
    let radius_sq = radius * radius;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius_sq {
                apply(center_x + dx, center_y + dy);
            }
        }
    }
}

/// 地形笔划：圆盘内每格写入地形色。
pub fn stamp_terrain(
    canvas: &mut Canvas,
    center_x: i32,
    center_y: i32,
    brush_size: u32,
    color: ColorRgb,
) {
    for_each_disc_cell(center_x, center_y, brush_size, |x, y| {
        canvas.set_terrain(x, y, color);
    });
}

/// 海拔笔划：越界与海水格由 `adjust_elevation` 自行拒绝。
pub fn stamp_elevation(
    canvas: &mut Canvas,
    center_x: i32,
    center_y: i32,
    brush_size: u32,
    direction: ElevationDirection,
) {
    let delta = direction.delta();
    for_each_disc_cell(center_x, center_y, brush_size, |x, y| {
        canvas.adjust_elevation(x, y, delta);
    });
}
