//! flowgrid - an interactive dataflow node canvas
//!
//! Connections flow from top to bottom: inputs on top of a node,
//! outputs on the bottom.

use flowgrid::constants;
use flowgrid::editor::NodeEditor;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::window::DEFAULT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "flowgrid",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(NodeEditor::new()))
        }),
    )
}
