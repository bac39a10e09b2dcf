use eframe::egui;
use egui::TextureHandle;

use crate::editor::MapEditor;
use crate::rendering::canvas::canvas_to_color_image;
use crate::rendering::viewport::ViewportState;
use crate::storage::raster;
use crate::storage::settings::Settings;
use crate::ui::canvas_view::{show_canvas, CanvasFeedback, PaintEvent};
use crate::ui::control_panel::{
    show_control_panel, BrushColorSelection, ControlAction, MapSizeSelection,
};
use crate::ui::status_bar::show_status_bar;
use crate::ui::theme;

pub struct MapPainterApp {
    editor: MapEditor,
    viewport: ViewportState,
    texture: Option<TextureHandle>,
    brush_color: BrushColorSelection,
    brush_size_slider: f32,
    map_size: MapSizeSelection,
    hover: Option<(u32, u32)>,
    last_status: String,
}

impl MapPainterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply_theme(&cc.egui_ctx);

        let settings = Settings::load();
        // 首次运行把默认值落盘，便于用户手工调整
        settings.save();

        let map_size = MapSizeSelection::default();
        let (width, height) = map_size.dims();
        let editor = MapEditor::new(width, height, settings.history_limit);

        let image = canvas_to_color_image(editor.canvas(), editor.active_layer());
        let texture = Some(cc.egui_ctx.load_texture(
            "map_texture",
            image,
            egui::TextureOptions::NEAREST,
        ));

        Self {
            brush_size_slider: editor.brush_size() as f32,
            editor,
            viewport: ViewportState::default(),
            texture,
            brush_color: BrushColorSelection::default(),
            map_size,
            hover: None,
            last_status: "画布初始化完成（全海水）".to_string(),
        }
    }

    /// 每次画布变更或切层后重新派生显示图像。
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let image = canvas_to_color_image(self.editor.canvas(), self.editor.active_layer());
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("map_texture", image, egui::TextureOptions::NEAREST));
            }
        }
    }

    // ── keyboard ────────────────────────────────────────────

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo_pressed = ctx.input(|i| {
            i.modifiers.command && !i.modifiers.shift && i.key_pressed(egui::Key::Z)
        });
        let redo_pressed = ctx.input(|i| {
            i.modifiers.command
                && (i.key_pressed(egui::Key::Y)
                    || (i.modifiers.shift && i.key_pressed(egui::Key::Z)))
        });

        if undo_pressed {
            self.do_undo(ctx);
        }
        if redo_pressed {
            self.do_redo(ctx);
        }
    }

    // ── actions ─────────────────────────────────────────────

    fn do_undo(&mut self, ctx: &egui::Context) {
        if self.editor.undo() {
            self.refresh_texture(ctx);
            self.last_status = "已撤销".to_string();
        } else {
            self.last_status = "没有可撤销的操作".to_string();
        }
    }

    fn do_redo(&mut self, ctx: &egui::Context) {
        if self.editor.redo() {
            self.refresh_texture(ctx);
            self.last_status = "已重做".to_string();
        } else {
            self.last_status = "没有可重做的操作".to_string();
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: &ControlAction) {
        if action.undo {
            self.do_undo(ctx);
        }
        if action.redo {
            self.do_redo(ctx);
        }
        if action.clear {
            self.editor.clear();
            self.refresh_texture(ctx);
            self.last_status = "已清空为海水".to_string();
        }
        if action.new_map {
            let (width, height) = self.map_size.dims();
            self.editor.initialize(width, height);
            self.viewport.reset();
            self.refresh_texture(ctx);
            self.last_status = format!("已新建地图 ({width}x{height})");
        }
        if action.import {
            self.import_png(ctx);
        }
        if action.export {
            self.export_png();
        }
        if action.zoom_in {
            self.viewport.zoom_in();
        }
        if action.zoom_out {
            self.viewport.zoom_out();
        }
        if action.zoom_reset {
            self.viewport.reset();
        }
    }

    /// 文件对话框取消时什么都不发生，核心操作不会被调用。
    fn import_png(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG 图像", &["png"])
            .pick_file()
        else {
            return;
        };

        match raster::import_png(&path) {
            Ok(decoded) => {
                self.last_status =
                    format!("已导入: {} ({}x{})", path.display(), decoded.width, decoded.height);
                self.editor
                    .import_raster(decoded.width, decoded.height, decoded.pixels);
                self.viewport.reset();
                self.refresh_texture(ctx);
            }
            Err(message) => {
                eprintln!("[storage] 导入失败: {message}");
                self.last_status = message;
            }
        }
    }

    fn export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG 图像", &["png"])
            .set_file_name("map.png")
            .save_file()
        else {
            return;
        };

        let (width, height, pixels) = self.editor.export_raster();
        match raster::export_png(width, height, pixels, &path) {
            Ok(()) => {
                self.last_status = format!("已导出: {}", path.display());
            }
            Err(message) => {
                eprintln!("[storage] 导出失败: {message}");
                self.last_status = message;
            }
        }
    }

    // ── painting ────────────────────────────────────────────

    fn handle_paint_events(&mut self, ctx: &egui::Context, feedback: &CanvasFeedback) {
        let mut painted = false;
        for event in &feedback.events {
            match *event {
                PaintEvent::Begin { x, y, button } => {
                    self.editor.begin_stroke(x, y, button);
                    painted |= self.editor.stroke_active();
                }
                PaintEvent::Move { x, y } => {
                    self.editor.continue_stroke(x, y);
                    painted |= self.editor.stroke_active();
                }
                PaintEvent::End => {
                    self.editor.end_stroke();
                }
            }
        }
        if painted {
            self.refresh_texture(ctx);
        }
    }
}

impl eframe::App for MapPainterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // ── control panel ────────────────────────────────────
        let mut layer = self.editor.active_layer();
        let mut action = ControlAction::none();
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                action = show_control_panel(
                    ui,
                    &mut layer,
                    &mut self.brush_color,
                    &mut self.brush_size_slider,
                    &mut self.map_size,
                    self.editor.can_undo(),
                    self.editor.can_redo(),
                );
                ui.separator();
                ui.label(format!("缩放: {:.0}%", self.viewport.zoom * 100.0));
                ui.label(format!(
                    "尺寸: {} x {}",
                    self.editor.canvas().width(),
                    self.editor.canvas().height()
                ));
                ui.label(format!(
                    "历史: {} 可撤销 / {} 可重做 (上限 {})",
                    self.editor.undo_depth(),
                    self.editor.redo_depth(),
                    self.editor.history_limit()
                ));
            });

        if layer != self.editor.active_layer() {
            self.editor.set_active_layer(layer);
            self.refresh_texture(ctx);
            self.last_status = format!("已切换图层: {}", layer.label());
        }
        self.editor.set_selected_color(self.brush_color.color());
        self.editor.set_brush_size(self.brush_size_slider);

        self.handle_action(ctx, &action);

        // ── status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(28.0)
            .show(ctx, |ui| {
                let fps = ctx.input(|i| {
                    if i.stable_dt > 0.0 {
                        1.0 / i.stable_dt
                    } else {
                        0.0
                    }
                });
                let canvas = self.editor.canvas();
                let memory_hint_mb = ((canvas.width() as usize * canvas.height() as usize * 4)
                    / (1024 * 1024))
                    .max(1);
                let hover_text = match self.hover {
                    Some((x, y)) => {
                        if canvas.is_land(x as i32, y as i32) {
                            let elevation = canvas.elevation_at(x as i32, y as i32).unwrap_or(0);
                            format!("({x}, {y}) 陆地 海拔 {elevation}")
                        } else {
                            format!("({x}, {y}) 海水")
                        }
                    }
                    None => "—".to_string(),
                };
                show_status_bar(ui, fps, memory_hint_mb, &hover_text, &self.last_status);
            });

        // ── canvas ───────────────────────────────────────────
        let mut feedback = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                feedback = Some(show_canvas(
                    ui,
                    texture,
                    self.editor.canvas().width(),
                    self.editor.canvas().height(),
                    self.editor.brush_size(),
                    &mut self.viewport,
                ));
            } else {
                ui.label("画布纹理尚未初始化");
            }
        });

        if let Some(feedback) = feedback {
            self.hover = feedback.hover.map(|h| (h.x, h.y));
            self.handle_paint_events(ctx, &feedback);
        }
    }
}
