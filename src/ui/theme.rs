//! # 粉蓝白主题
//!
//! 沿用 Lian 系工具的粉蓝白配色，应用到 egui Style。

use egui::{Color32, Rounding, Stroke, Visuals};

// ═══════════════════════════════════════════════════════════
// 调色板常量
// ═══════════════════════════════════════════════════════════

/// 粉色（主强调色）
pub const PINK: Color32 = Color32::from_rgb(245, 169, 184);
/// 蓝色（次强调色）
pub const BLUE: Color32 = Color32::from_rgb(91, 206, 250);
/// 浅蓝
pub const BLUE_LIGHT: Color32 = Color32::from_rgb(145, 225, 255);
/// 白色
pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);

/// 深色背景
pub const BG_DARK: Color32 = Color32::from_rgb(30, 30, 40);
/// 面板背景
pub const BG_PANEL: Color32 = Color32::from_rgb(38, 38, 52);
/// 窗口背景
pub const BG_WINDOW: Color32 = Color32::from_rgb(42, 42, 58);
/// 控件背景（非激活 / hover / active）
pub const BG_WIDGET: Color32 = Color32::from_rgb(50, 50, 68);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(62, 62, 82);
pub const BG_WIDGET_ACTIVE: Color32 = Color32::from_rgb(75, 75, 100);

/// 文字颜色
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 145);

// ═══════════════════════════════════════════════════════════
// 应用主题
// ═══════════════════════════════════════════════════════════

/// 将粉蓝白主题应用到 egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::dark();

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_WINDOW;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = Color32::from_rgb(45, 45, 60);

    let rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = BG_WIDGET;
    visuals.widgets.inactive.weak_bg_fill = BG_WIDGET;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(70, 70, 90));
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = rounding;

    visuals.widgets.hovered.bg_fill = BG_WIDGET_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_WIDGET_HOVER;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BLUE);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, WHITE);
    visuals.widgets.hovered.rounding = rounding;

    visuals.widgets.active.bg_fill = BG_WIDGET_ACTIVE;
    visuals.widgets.active.weak_bg_fill = BG_WIDGET_ACTIVE;
    visuals.widgets.active.bg_stroke = Stroke::new(1.5, PINK);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, WHITE);
    visuals.widgets.active.rounding = rounding;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.weak_bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.noninteractive.rounding = rounding;

    visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(91, 206, 250, 80);
    visuals.selection.stroke = Stroke::new(1.0, BLUE_LIGHT);

    visuals.window_stroke = Stroke::new(1.0, Color32::from_rgb(80, 80, 110));
    visuals.window_rounding = Rounding::same(6.0);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}
