//! Parameter panel for editing the selected node

use crate::nodes::value::{BinaryOp, LiteralType};
use crate::nodes::{Node, NodeKind};

/// Renders editing controls for the selected node in a floating window
pub struct ParameterPanel {
    /// Item text being typed into the list editor
    pending_item: String,
}

impl ParameterPanel {
    pub fn new() -> Self {
        Self {
            pending_item: String::new(),
        }
    }

    /// Render the panel. Returns true when the node's state changed and it
    /// needs re-evaluation.
    pub fn render(&mut self, ctx: &egui::Context, node: &mut Node) -> bool {
        let mut changed = false;

        egui::Window::new(format!("{} — parameters", node.title))
            .id(egui::Id::new("parameter_panel"))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| match &mut node.kind {
                NodeKind::Input {
                    literal,
                    literal_type,
                } => {
                    egui::ComboBox::from_label("Type")
                        .selected_text(literal_type.label())
                        .show_ui(ui, |ui| {
                            for ty in LiteralType::ALL {
                                changed |= ui
                                    .selectable_value(literal_type, ty, ty.label())
                                    .changed();
                            }
                        });

                    if *literal_type == LiteralType::Bool {
                        // Booleans pick from the two spellings instead of free text.
                        egui::ComboBox::from_label("Value")
                            .selected_text(literal.as_str())
                            .show_ui(ui, |ui| {
                                for spelling in ["True", "False"] {
                                    changed |= ui
                                        .selectable_value(
                                            literal,
                                            spelling.to_string(),
                                            spelling,
                                        )
                                        .changed();
                                }
                            });
                    } else {
                        ui.horizontal(|ui| {
                            ui.label("Value");
                            changed |= ui.text_edit_singleline(literal).changed();
                        });
                    }
                }
                NodeKind::Operation { op } => {
                    egui::ComboBox::from_label("Operation")
                        .selected_text(op.label())
                        .show_ui(ui, |ui| {
                            for candidate in BinaryOp::ALL {
                                changed |= ui
                                    .selectable_value(op, candidate, candidate.label())
                                    .changed();
                            }
                        });
                }
                NodeKind::Print => {
                    ui.label(format!("Value: {}", node.result));
                }
                NodeKind::List { items } => {
                    let mut remove_index = None;
                    for (i, item) in items.iter_mut().enumerate() {
                        ui.horizontal(|ui| {
                            changed |= ui.text_edit_singleline(item).changed();
                            if ui.small_button("✕").clicked() {
                                remove_index = Some(i);
                            }
                        });
                    }
                    if let Some(i) = remove_index {
                        items.remove(i);
                        changed = true;
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.pending_item);
                        if ui.button("Add").clicked() && !self.pending_item.is_empty() {
                            items.push(std::mem::take(&mut self.pending_item));
                            changed = true;
                        }
                    });
                }
            });

        changed
    }
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self::new()
    }
}
