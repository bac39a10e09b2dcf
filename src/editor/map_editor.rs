//! # 地图编辑器
//!
//! 核心的组合根：一张 [`Canvas`]、一份 [`History`]、当前图层与
//! 笔刷配置。UI、快捷键、文件对话框都只通过这里的操作集驱动核心，
//! 渲染则在每次变更后由调用方重新派生。
//!
//! 笔划协议：`begin_stroke` 捕获本次笔划的参数（颜色或海拔方向）
//! 并记录一次撤销快照，之后每个输入采样各盖一次圆盘章，
//! `end_stroke` 清除笔划状态。采样点之间不做插值，
//! 快速移动会留下间隙。

use crate::core::canvas::Canvas;
use crate::core::color::{self, ColorRgb};
use crate::core::layer::ActiveLayer;
use crate::editor::brush::{self, ElevationDirection};
use crate::editor::history::History;

/// 触发笔划的指针键。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeButton {
    Primary,
    Secondary,
}

/// 一次笔划期间固定不变的参数，`begin_stroke` 时捕获。
/// 笔划进行中指针键状态的变化不再被读取。
#[derive(Debug, Clone, Copy)]
enum StrokeKind {
    Terrain(ColorRgb),
    Elevation(ElevationDirection),
}

pub struct MapEditor {
    canvas: Canvas,
    history: History,
    history_limit: i64,
    active_layer: ActiveLayer,
    brush_size: u32,
    selected_color: ColorRgb,
    active_stroke: Option<StrokeKind>,
}

impl MapEditor {
    pub const DEFAULT_BRUSH_SIZE: u32 = 9;

    pub fn new(width: u32, height: u32, history_limit: i64) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            history: History::new(history_limit),
            history_limit,
            active_layer: ActiveLayer::default(),
            brush_size: Self::DEFAULT_BRUSH_SIZE,
            selected_color: color::LAND,
            active_stroke: None,
        }
    }

    // ── accessors ───────────────────────────────────────────

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn active_layer(&self) -> ActiveLayer {
        self.active_layer
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn stroke_active(&self) -> bool {
        self.active_stroke.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_len()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_len()
    }

    // ── configuration ───────────────────────────────────────

    /// 笔刷直径由连续控件驱动：四舍五入取整，下限 1。
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size.round().max(1.0) as u32;
    }

    pub fn set_selected_color(&mut self, c: ColorRgb) {
        self.selected_color = c;
    }

    /// 切换编辑/显示目标，不触碰底层数据。
    pub fn set_active_layer(&mut self, layer: ActiveLayer) {
        self.active_layer = layer;
    }

    // ── discrete edit actions ───────────────────────────────

    /// 新建地图：记录撤销快照后整体替换画布（全海水）。
    pub fn initialize(&mut self, width: u32, height: u32) {
        self.history.record(self.canvas.snapshot());
        self.canvas = Canvas::new(width, height);
        self.active_stroke = None;
    }

    /// 清空到海水。
    pub fn clear(&mut self) {
        self.history.record(self.canvas.snapshot());
        self.canvas.fill(color::WATER);
    }

    /// 导入栅格：按声明尺寸替换画布，海拔清零。
    pub fn import_raster(&mut self, width: u32, height: u32, pixels: Vec<ColorRgb>) {
        self.history.record(self.canvas.snapshot());
        self.canvas = Canvas::from_pixels(width, height, pixels);
        self.active_stroke = None;
    }

    /// 导出地形层原始数据（海拔从不导出）。
    pub fn export_raster(&self) -> (u32, u32, &[ColorRgb]) {
        (self.canvas.width(), self.canvas.height(), self.canvas.terrain())
    }

    // ── stroke lifecycle ────────────────────────────────────

    /// 开始一次笔划：确定参数、记录撤销快照、盖第一个章。
    ///
    /// 地形层只响应主键；次键只在海拔层有含义（降低）。
    /// 不满足条件时什么都不发生。
    pub fn begin_stroke(&mut self, x: i32, y: i32, button: StrokeButton) {
        if self.active_stroke.is_some() {
            return;
        }

        let kind = match self.active_layer {
            ActiveLayer::BaseTerrain => match button {
                StrokeButton::Primary => StrokeKind::Terrain(self.selected_color),
                StrokeButton::Secondary => return,
            },
            ActiveLayer::Elevation => StrokeKind::Elevation(match button {
                StrokeButton::Primary => ElevationDirection::Raise,
                StrokeButton::Secondary => ElevationDirection::Lower,
            }),
        };

        self.history.record(self.canvas.snapshot());
        self.active_stroke = Some(kind);
        self.stamp(x, y);
    }

    /// 笔划未激活时为 no-op；激活时用 begin 捕获的参数再盖一章。
    pub fn continue_stroke(&mut self, x: i32, y: i32) {
        if self.active_stroke.is_some() {
            self.stamp(x, y);
        }
    }

    pub fn end_stroke(&mut self) {
        self.active_stroke = None;
    }

    fn stamp(&mut self, x: i32, y: i32) {
        match self.active_stroke {
            Some(StrokeKind::Terrain(c)) => {
                brush::stamp_terrain(&mut self.canvas, x, y, self.brush_size, c);
            }
            Some(StrokeKind::Elevation(direction)) => {
                brush::stamp_elevation(&mut self.canvas, x, y, self.brush_size, direction);
            }
            None => {}
        }
    }

    // ── undo / redo ─────────────────────────────────────────

    /// 成功时恢复快照并返回 true；无可撤销返回 false。
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.canvas.snapshot()) {
            Some(state) => {
                self.canvas.restore(&state);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.canvas.snapshot()) {
            Some(state) => {
                self.canvas.restore(&state);
                true
            }
            None => false,
        }
    }

    pub fn history_limit(&self) -> i64 {
        self.history_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{LAND, WATER};

    fn editor(width: u32, height: u32) -> MapEditor {
        let mut ed = MapEditor::new(width, height, 50);
        ed.set_brush_size(1.0);
        ed
    }

    fn paint_cell(ed: &mut MapEditor, x: i32, y: i32) {
        ed.begin_stroke(x, y, StrokeButton::Primary);
        ed.end_stroke();
    }

    #[test]
    fn test_raise_on_all_water_changes_nothing() {
        let mut ed = editor(4, 4);
        ed.set_active_layer(ActiveLayer::Elevation);
        let before = ed.canvas().snapshot();

        ed.set_brush_size(3.0);
        ed.begin_stroke(1, 1, StrokeButton::Primary);
        ed.end_stroke();

        assert_eq!(ed.canvas().snapshot(), before);
        assert!(ed.canvas().elevation().iter().all(|&e| e == 0));
    }

    #[test]
    fn test_raise_on_land_steps_by_four() {
        let mut ed = editor(5, 5);
        paint_cell(&mut ed, 2, 2);

        ed.set_active_layer(ActiveLayer::Elevation);
        ed.begin_stroke(2, 2, StrokeButton::Primary);
        ed.end_stroke();

        assert_eq!(ed.canvas().elevation_at(2, 2), Some(4));
    }

    #[test]
    fn test_secondary_button_lowers_elevation() {
        let mut ed = editor(5, 5);
        paint_cell(&mut ed, 2, 2);

        ed.set_active_layer(ActiveLayer::Elevation);
        ed.begin_stroke(2, 2, StrokeButton::Primary);
        ed.continue_stroke(2, 2);
        ed.end_stroke();
        assert_eq!(ed.canvas().elevation_at(2, 2), Some(8));

        ed.begin_stroke(2, 2, StrokeButton::Secondary);
        ed.end_stroke();
        assert_eq!(ed.canvas().elevation_at(2, 2), Some(4));
    }

    #[test]
    fn test_secondary_button_starts_no_terrain_stroke() {
        let mut ed = editor(4, 4);
        ed.begin_stroke(1, 1, StrokeButton::Secondary);
        assert!(!ed.stroke_active());
        assert_eq!(ed.canvas().terrain_at(1, 1), Some(WATER));
        // 也不应占用一份撤销额度
        assert!(!ed.can_undo());
    }

    #[test]
    fn test_continue_without_begin_is_noop() {
        let mut ed = editor(4, 4);
        ed.continue_stroke(1, 1);
        assert_eq!(ed.canvas().terrain_at(1, 1), Some(WATER));
    }

    #[test]
    fn test_stroke_captures_color_at_begin() {
        let mut ed = editor(4, 4);
        ed.begin_stroke(0, 0, StrokeButton::Primary);
        ed.set_selected_color(WATER); // 笔划中途换色不生效
        ed.continue_stroke(1, 0);
        ed.end_stroke();

        assert_eq!(ed.canvas().terrain_at(0, 0), Some(LAND));
        assert_eq!(ed.canvas().terrain_at(1, 0), Some(LAND));
    }

    #[test]
    fn test_one_stroke_records_one_undo_entry() {
        let mut ed = editor(4, 4);
        ed.begin_stroke(0, 0, StrokeButton::Primary);
        ed.continue_stroke(1, 0);
        ed.continue_stroke(2, 0);
        ed.end_stroke();

        assert!(ed.undo());
        assert!(!ed.can_undo());
        // 一次撤销抹掉整条笔划
        assert_eq!(ed.canvas().terrain_at(0, 0), Some(WATER));
        assert_eq!(ed.canvas().terrain_at(2, 0), Some(WATER));
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut ed = editor(4, 4);
        let s0 = ed.canvas().snapshot();
        paint_cell(&mut ed, 1, 1);
        let s1 = ed.canvas().snapshot();

        assert!(ed.undo());
        assert_eq!(ed.canvas().snapshot(), s0);

        assert!(ed.redo());
        assert_eq!(ed.canvas().snapshot(), s1);
    }

    #[test]
    fn test_fresh_edit_clears_redo() {
        let mut ed = editor(4, 4);
        paint_cell(&mut ed, 1, 1);
        assert!(ed.undo());

        paint_cell(&mut ed, 2, 2);
        assert!(!ed.redo());
    }

    #[test]
    fn test_limit_one_evicts_first_snapshot() {
        let mut ed = MapEditor::new(4, 4, 1);
        ed.set_brush_size(1.0);
        paint_cell(&mut ed, 0, 0);
        let after_first = ed.canvas().snapshot();
        paint_cell(&mut ed, 1, 1);

        assert!(ed.undo());
        assert_eq!(ed.canvas().snapshot(), after_first);
        assert!(!ed.undo());
    }

    #[test]
    fn test_undo_unavailable_when_history_disabled() {
        let mut ed = MapEditor::new(4, 4, 0);
        ed.set_brush_size(1.0);
        paint_cell(&mut ed, 1, 1);
        assert!(!ed.can_undo());
        assert!(!ed.undo());
        // 画布本身照常被编辑
        assert_eq!(ed.canvas().terrain_at(1, 1), Some(LAND));
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut ed = editor(4, 4);
        paint_cell(&mut ed, 1, 1);
        let painted = ed.canvas().snapshot();

        ed.clear();
        assert!(ed.canvas().terrain().iter().all(|&c| c == WATER));

        assert!(ed.undo());
        assert_eq!(ed.canvas().snapshot(), painted);
    }

    #[test]
    fn test_import_replaces_canvas_and_is_undoable() {
        let mut ed = editor(4, 4);
        paint_cell(&mut ed, 1, 1);
        let before_import = ed.canvas().snapshot();

        ed.import_raster(2, 3, vec![LAND; 6]);
        assert_eq!(ed.canvas().width(), 2);
        assert_eq!(ed.canvas().height(), 3);
        assert!(ed.canvas().elevation().iter().all(|&e| e == 0));

        assert!(ed.undo());
        assert_eq!(ed.canvas().snapshot(), before_import);
        assert_eq!(ed.canvas().width(), 4);
    }

    #[test]
    fn test_export_is_terrain_only() {
        let mut ed = editor(3, 2);
        paint_cell(&mut ed, 0, 0);
        ed.set_active_layer(ActiveLayer::Elevation);
        ed.begin_stroke(0, 0, StrokeButton::Primary);
        ed.end_stroke();

        let (w, h, pixels) = ed.export_raster();
        assert_eq!((w, h), (3, 2));
        assert_eq!(pixels.len(), 6);
        assert_eq!(pixels[0], LAND);
        // 导出内容即地形字段本身，海拔不掺入
        assert_eq!(pixels, ed.canvas().terrain());
    }

    #[test]
    fn test_initialize_is_undoable() {
        let mut ed = editor(4, 4);
        paint_cell(&mut ed, 1, 1);
        let painted = ed.canvas().snapshot();

        ed.initialize(8, 8);
        assert_eq!(ed.canvas().width(), 8);
        assert!(ed.canvas().terrain().iter().all(|&c| c == WATER));

        assert!(ed.undo());
        assert_eq!(ed.canvas().snapshot(), painted);
    }

    #[test]
    fn test_brush_size_rounds_and_floors_at_one() {
        let mut ed = editor(4, 4);
        ed.set_brush_size(0.2);
        assert_eq!(ed.brush_size(), 1);
        ed.set_brush_size(2.5);
        assert_eq!(ed.brush_size(), 3);
        ed.set_brush_size(7.4);
        assert_eq!(ed.brush_size(), 7);
    }

    #[test]
    fn test_layer_switch_leaves_data_untouched() {
        let mut ed = editor(4, 4);
        paint_cell(&mut ed, 1, 1);
        let before = ed.canvas().snapshot();

        ed.set_active_layer(ActiveLayer::Elevation);
        ed.set_active_layer(ActiveLayer::BaseTerrain);
        assert_eq!(ed.canvas().snapshot(), before);
    }
}
