//! Menu bar and node-creation context menu

use crate::nodes::{NodeCategory, NodeRegistry};
use egui::Pos2;

/// Actions a menu can request from the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,
    /// Create a node of the given registry type at the canvas center
    CreateNode(String),
}

/// Render the top menu bar. Returns the requested action, if any.
pub fn render_menu_bar(ctx: &egui::Context, window_title: &str) -> Option<MenuAction> {
    let mut action = None;

    egui::TopBottomPanel::top("top_menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    action = Some(MenuAction::NewFile);
                    ui.close_menu();
                }
                if ui.button("Open…").clicked() {
                    action = Some(MenuAction::OpenFile);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Save").clicked() {
                    action = Some(MenuAction::SaveFile);
                    ui.close_menu();
                }
                if ui.button("Save As…").clicked() {
                    action = Some(MenuAction::SaveFileAs);
                    ui.close_menu();
                }
            });

            ui.menu_button("Add", |ui| {
                for category in [NodeCategory::Data, NodeCategory::Math, NodeCategory::Output] {
                    ui.menu_button(category.name(), |ui| {
                        for (node_type, node_category) in NodeRegistry::types() {
                            if node_category == category && ui.button(node_type).clicked() {
                                action = Some(MenuAction::CreateNode(node_type.to_string()));
                                ui.close_menu();
                            }
                        }
                    });
                }
            });

            ui.separator();
            ui.label(window_title);
        });
    });

    action
}

/// Render the right-click creation menu at a fixed position.
/// Returns the chosen node type, and whether the menu should close.
pub fn render_context_menu(ctx: &egui::Context, position: Pos2) -> (Option<String>, bool) {
    let mut chosen = None;
    let mut close = false;

    let popup_id = egui::Id::new("canvas_context_menu");
    let menu_response = egui::Area::new(popup_id)
        .fixed_pos(position)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(120.0);

                ui.label("Create Node:");

                let mut last_category = None;
                for (node_type, category) in NodeRegistry::types() {
                    if last_category.is_some() && last_category != Some(category) {
                        ui.separator();
                    }
                    last_category = Some(category);

                    if ui.button(node_type).clicked() {
                        chosen = Some(node_type.to_string());
                        close = true;
                    }
                }
            });
        });

    // Close when clicking outside the menu area
    if ctx.input(|i| i.pointer.primary_clicked()) {
        if let Some(click_pos) = ctx.input(|i| i.pointer.interact_pos()) {
            if !menu_response.response.rect.contains(click_pos) {
                close = true;
            }
        }
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        close = true;
    }

    (chosen, close)
}
