//! # 画布模型
//!
//! `Canvas` 持有两张行主序平行栅格：地形色与海拔值，
//! 下标统一为 `y * width + x`。
//!
//! **不变量**：
//! - `terrain.len() == elevation.len() == width * height`
//! - 海水格的海拔恒为 0（水下不记录高度）
//! - 所有越界访问静默裁剪，绝不报错——笔刷圆盘经常越过边界
//!
//! `MapState` 是某一时刻画布内容的完整快照，创建后不再修改，
//! 仅作撤销/重做的载荷。

use crate::core::color::{self, ColorRgb};

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    terrain: Vec<ColorRgb>,
    elevation: Vec<u8>,
}

/// 画布快照 — 撤销/重做载荷，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapState {
    width: u32,
    height: u32,
    terrain: Vec<ColorRgb>,
    elevation: Vec<u8>,
}

impl Canvas {
    /// 新建画布：全海水、海拔全 0。
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            terrain: vec![color::WATER; len],
            elevation: vec![0; len],
        }
    }

    /// 由导入的像素数据建画布，海拔清零。
    ///
    /// 像素数量以声明的宽高为准，不足补海水，多余截断。
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<ColorRgb>) -> Self {
        let len = (width as usize) * (height as usize);
        let mut terrain = pixels;
        terrain.resize(len, color::WATER);
        Self {
            width,
            height,
            terrain,
            elevation: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 地形字段原始切片（渲染与导出使用）。
    pub fn terrain(&self) -> &[ColorRgb] {
        &self.terrain
    }

    /// 海拔字段原始切片。
    pub fn elevation(&self) -> &[u8] {
        &self.elevation
    }

    /// 坐标合法时返回扁平下标，越界返回 None。
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn terrain_at(&self, x: i32, y: i32) -> Option<ColorRgb> {
        self.index(x, y).map(|i| self.terrain[i])
    }

    pub fn elevation_at(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.elevation[i])
    }

    /// 越界与海水格均为 false；其余一律视作陆地。
    pub fn is_land(&self, x: i32, y: i32) -> bool {
        matches!(self.terrain_at(x, y), Some(c) if c != color::WATER)
    }

    /// 写地形色；写入海水色时同步清零该格海拔。越界静默忽略。
    pub fn set_terrain(&mut self, x: i32, y: i32, c: ColorRgb) {
        if let Some(i) = self.index(x, y) {
            self.terrain[i] = c;
            if c == color::WATER {
                self.elevation[i] = 0;
            }
        }
    }

    /// 调整海拔，结果截断到 [0, 255]。越界或海水格为 no-op。
    pub fn adjust_elevation(&mut self, x: i32, y: i32, delta: i32) {
        if let Some(i) = self.index(x, y) {
            if self.terrain[i] != color::WATER {
                let v = self.elevation[i] as i32 + delta;
                self.elevation[i] = v.clamp(0, 255) as u8;
            }
        }
    }

    /// 整片填充地形色并清空全部海拔（初始化 / 清空到海水）。
    pub fn fill(&mut self, c: ColorRgb) {
        self.terrain.fill(c);
        self.elevation.fill(0);
    }

    pub fn snapshot(&self) -> MapState {
        MapState {
            width: self.width,
            height: self.height,
            terrain: self.terrain.clone(),
            elevation: self.elevation.clone(),
        }
    }

    /// 用快照整体覆盖画布内容（尺寸一并恢复）。
    pub fn restore(&mut self, state: &MapState) {
        self.width = state.width;
        self.height = state.height;
        self.terrain = state.terrain.clone();
        self.elevation = state.elevation.clone();
    }
}
