//! # 画布视图
//!
//! 中央画布控件：棋盘格底、按缩放贴出地图纹理、滚轮缩放（锚定
//! 光标）、中键拖拽平移，并把指针按下/移动/抬起换算成格坐标的
//! 绘制事件交还给 app。设备坐标到格坐标的换算是
//! `cell = floor((pos - 图像原点) / zoom)`，缩放只影响显示与换算，
//! 不触碰数据。

use egui::{Color32, Pos2, PointerButton, Rect, Sense, Stroke, TextureHandle, Ui, Vec2};

use crate::editor::StrokeButton;
use crate::rendering::viewport::{ViewportState, MAX_ZOOM, MIN_ZOOM};

#[derive(Debug, Clone, Copy)]
pub struct HoverInfo {
    pub x: u32,
    pub y: u32,
}

/// 一帧内发生的绘制输入，按发生顺序排列。
#[derive(Debug, Clone, Copy)]
pub enum PaintEvent {
    Begin { x: i32, y: i32, button: StrokeButton },
    Move { x: i32, y: i32 },
    End,
}

#[derive(Debug, Clone, Default)]
pub struct CanvasFeedback {
    pub hover: Option<HoverInfo>,
    pub events: Vec<PaintEvent>,
}

pub fn show_canvas(
    ui: &mut Ui,
    texture: &TextureHandle,
    map_width: u32,
    map_height: u32,
    brush_size: u32,
    viewport: &mut ViewportState,
) -> CanvasFeedback {
    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, Sense::click_and_drag());

    // ── background checkerboard ──────────────────────────────
    let painter = ui.painter_at(rect);
    let tile = 48.0;
    let c0 = Color32::from_gray(28);
    let c1 = Color32::from_gray(35);
    let cols = (rect.width() / tile).ceil() as i32;
    let rows = (rect.height() / tile).ceil() as i32;
    for r in 0..rows {
        for c in 0..cols {
            let min = Pos2::new(rect.left() + c as f32 * tile, rect.top() + r as f32 * tile);
            let max = Pos2::new(
                (min.x + tile).min(rect.right()),
                (min.y + tile).min(rect.bottom()),
            );
            let color = if (r + c) % 2 == 0 { c0 } else { c1 };
            painter.rect_filled(Rect::from_min_max(min, max), 0.0, color);
        }
    }

    // ── map image ────────────────────────────────────────────
    let image_size = Vec2::new(
        map_width as f32 * viewport.zoom,
        map_height as f32 * viewport.zoom,
    );
    let center = rect.center() + Vec2::new(viewport.offset[0], viewport.offset[1]);
    let image_rect = Rect::from_center_size(center, image_size);

    painter.image(
        texture.id(),
        image_rect,
        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
        Color32::WHITE,
    );
    painter.rect_stroke(image_rect, 0.0, Stroke::new(1.0, Color32::from_gray(120)));

    // ── middle-drag to pan ───────────────────────────────────
    if response.dragged_by(PointerButton::Middle) {
        let delta = response.drag_delta();
        viewport.pan(delta.x, delta.y);
    }

    // ── scroll wheel to zoom (anchored at cursor) ────────────
    let hovered = response.hovered() || response.dragged();
    if hovered {
        let scroll = ui.ctx().input(|i| i.smooth_scroll_delta);
        if scroll.y.abs() > 0.5 {
            if let Some(pointer) = ui.ctx().input(|i| i.pointer.hover_pos()) {
                let old_zoom = viewport.zoom;
                let factor = (1.0 + scroll.y * 0.001).clamp(0.9, 1.1);
                let new_zoom = (old_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
                let scale = new_zoom / old_zoom;

                // Keep the point under the cursor fixed
                let p = pointer - rect.center();
                viewport.offset[0] = p.x * (1.0 - scale) + viewport.offset[0] * scale;
                viewport.offset[1] = p.y * (1.0 - scale) + viewport.offset[1] * scale;
                viewport.zoom = new_zoom;
            }
        }
    }

    let mut feedback = CanvasFeedback::default();

    // ── paint events ─────────────────────────────────────────
    let zoom = viewport.zoom;
    let to_cell = |pos: Pos2| -> (i32, i32) {
        (
            ((pos.x - image_rect.left()) / zoom).floor() as i32,
            ((pos.y - image_rect.top()) / zoom).floor() as i32,
        )
    };

    ui.ctx().input(|i| {
        if let Some(pos) = i.pointer.interact_pos() {
            if rect.contains(pos) && i.pointer.button_pressed(PointerButton::Primary) {
                let (x, y) = to_cell(pos);
                feedback.events.push(PaintEvent::Begin {
                    x,
                    y,
                    button: StrokeButton::Primary,
                });
            } else if rect.contains(pos) && i.pointer.button_pressed(PointerButton::Secondary) {
                let (x, y) = to_cell(pos);
                feedback.events.push(PaintEvent::Begin {
                    x,
                    y,
                    button: StrokeButton::Secondary,
                });
            } else if i.pointer.is_moving()
                && (i.pointer.button_down(PointerButton::Primary)
                    || i.pointer.button_down(PointerButton::Secondary))
            {
                // 每个移动采样各盖一次章，采样点之间不插值
                let (x, y) = to_cell(pos);
                feedback.events.push(PaintEvent::Move { x, y });
            }
        }
        if i.pointer.button_released(PointerButton::Primary)
            || i.pointer.button_released(PointerButton::Secondary)
        {
            feedback.events.push(PaintEvent::End);
        }
    });

    // ── brush preview + hover info ───────────────────────────
    let pointer = match response.hover_pos() {
        Some(p) => p,
        None => return feedback,
    };
    if !image_rect.contains(pointer) {
        return feedback;
    }

    painter.circle_stroke(
        pointer,
        brush_size as f32 / 2.0 * zoom,
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
    );

    let (x, y) = to_cell(pointer);
    if x >= 0 && y >= 0 && (x as u32) < map_width && (y as u32) < map_height {
        feedback.hover = Some(HoverInfo {
            x: x as u32,
            y: y as u32,
        });
    }

    feedback
}
