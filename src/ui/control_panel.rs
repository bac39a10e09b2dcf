use egui::{Slider, Ui};

use crate::core::color::{self, ColorRgb};
use crate::core::layer::ActiveLayer;

// ── action returned to the app ──────────────────────────────

#[derive(Debug, Clone)]
pub struct ControlAction {
    pub undo: bool,
    pub redo: bool,
    pub clear: bool,
    pub new_map: bool,
    pub import: bool,
    pub export: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub zoom_reset: bool,
}

impl ControlAction {
    pub fn none() -> Self {
        Self {
            undo: false,
            redo: false,
            clear: false,
            new_map: false,
            import: false,
            export: false,
            zoom_in: false,
            zoom_out: false,
            zoom_reset: false,
        }
    }
}

// ── selection enums ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushColorSelection {
    Land,
    Water,
}

impl Default for BrushColorSelection {
    fn default() -> Self {
        Self::Land
    }
}

impl BrushColorSelection {
    pub fn color(self) -> ColorRgb {
        match self {
            Self::Land => color::LAND,
            Self::Water => color::WATER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSizeSelection {
    Small,
    Medium,
    Large,
}

impl Default for MapSizeSelection {
    fn default() -> Self {
        Self::Medium
    }
}

impl MapSizeSelection {
    pub fn dims(self) -> (u32, u32) {
        match self {
            Self::Small => (320, 240),
            Self::Medium => (640, 480),
            Self::Large => (1024, 768),
        }
    }
}

// ── panel rendering ─────────────────────────────────────────

pub fn show_control_panel(
    ui: &mut Ui,
    active_layer: &mut ActiveLayer,
    brush_color: &mut BrushColorSelection,
    brush_size: &mut f32,
    map_size: &mut MapSizeSelection,
    can_undo: bool,
    can_redo: bool,
) -> ControlAction {
    let mut action = ControlAction::none();

    ui.heading("控制面板");
    ui.separator();

    // ── layer ──
    ui.label("图层");
    ui.radio_value(active_layer, ActiveLayer::BaseTerrain, ActiveLayer::BaseTerrain.label());
    ui.radio_value(active_layer, ActiveLayer::Elevation, ActiveLayer::Elevation.label());
    if *active_layer == ActiveLayer::Elevation {
        ui.colored_label(
            super::theme::TEXT_MUTED,
            "左键抬升，右键降低（只作用于陆地）",
        );
    }

    ui.separator();

    // ── palette ──
    ui.label("调色板");
    ui.add_enabled_ui(*active_layer == ActiveLayer::BaseTerrain, |ui| {
        ui.radio_value(brush_color, BrushColorSelection::Land, "陆地");
        ui.radio_value(brush_color, BrushColorSelection::Water, "海水");
    });

    ui.separator();

    // ── brush ──
    ui.label("笔刷直径");
    ui.add(Slider::new(brush_size, 1.0..=64.0).suffix(" px"));

    ui.separator();

    // ── history ──
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_undo, egui::Button::new("↩ 撤销"))
            .clicked()
        {
            action.undo = true;
        }
        if ui
            .add_enabled(can_redo, egui::Button::new("↪ 重做"))
            .clicked()
        {
            action.redo = true;
        }
    });

    ui.separator();

    // ── map actions ──
    ui.label("地图尺寸");
    for (selection, label) in [
        (MapSizeSelection::Small, "小 (320×240)"),
        (MapSizeSelection::Medium, "中 (640×480)"),
        (MapSizeSelection::Large, "大 (1024×768)"),
    ] {
        ui.radio_value(map_size, selection, label);
    }
    ui.horizontal(|ui| {
        if ui.button("🗺 新建地图").clicked() {
            action.new_map = true;
        }
        if ui.button("🌊 清空").clicked() {
            action.clear = true;
        }
    });

    ui.separator();

    // ── file ──
    ui.horizontal(|ui| {
        if ui.button("📂 导入 PNG").clicked() {
            action.import = true;
        }
        if ui.button("📸 导出 PNG").clicked() {
            action.export = true;
        }
    });

    ui.separator();

    // ── zoom ──
    ui.label("缩放");
    ui.horizontal(|ui| {
        if ui.button("+").clicked() {
            action.zoom_in = true;
        }
        if ui.button("-").clicked() {
            action.zoom_out = true;
        }
        if ui.button("重置").clicked() {
            action.zoom_reset = true;
        }
    });

    action
}
