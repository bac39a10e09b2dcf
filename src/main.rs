mod core;
mod editor;
mod rendering;
mod storage;
mod ui;

use ui::app::MapPainterApp;

fn main() {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lian Map Painter")
            .with_inner_size([1280.0, 800.0])
            .with_app_id("lian-map-painter"),
        ..Default::default()
    };

    eframe::run_native(
        "Lian Map Painter",
        options,
        Box::new(|cc| Box::new(MapPainterApp::new(cc))),
    )
    .expect("窗口启动失败");
}
