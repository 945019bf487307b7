//! Node editor application
//!
//! Owns the graph, the evaluation engine, and the viewport, and turns raw
//! canvas input into graph edits: node placement, dragging, wire gestures,
//! selection, and deletion.

pub mod file_manager;
pub mod input;
pub mod interaction;
pub mod menus;
pub mod panels;
pub mod rendering;

pub use file_manager::FileManager;
pub use input::InputState;
pub use interaction::InteractionManager;

use crate::constants::canvas::{MAX_ZOOM, MIN_ZOOM};
use crate::nodes::{GraphEngine, NodeGraph, NodeId, NodeRegistry, SocketKind};
use crate::theme;
use egui::{Pos2, Sense, Vec2};
use log::{error, warn};
use menus::MenuAction;
use panels::ParameterPanel;

/// The main node editor application
pub struct NodeEditor {
    graph: NodeGraph,
    engine: GraphEngine,
    input_state: InputState,
    interaction: InteractionManager,
    file_manager: FileManager,
    parameter_panel: ParameterPanel,
    /// Index into `graph.connections` of the selected wire.
    selected_connection: Option<usize>,
    pan_offset: Vec2,
    zoom: f32,
}

impl NodeEditor {
    pub fn new() -> Self {
        Self {
            graph: NodeGraph::new(),
            engine: GraphEngine::new(),
            input_state: InputState::new(),
            interaction: InteractionManager::new(),
            file_manager: FileManager::new(),
            parameter_panel: ParameterPanel::new(),
            selected_connection: None,
            pan_offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    fn create_node(&mut self, node_type: &str, world_pos: Pos2) {
        match NodeRegistry::create_node(node_type, world_pos) {
            Some(node) => {
                // evaluate_dirty picks the new node up as unseen
                self.graph.add_node(node);
                self.engine.invalidate_order();
                self.file_manager.mark_modified();
            }
            None => warn!("unknown node type: {}", node_type),
        }
    }

    fn handle_menu_action(&mut self, action: MenuAction, canvas_center_world: Pos2) {
        match action {
            MenuAction::NewFile => {
                self.graph = NodeGraph::new();
                self.engine = GraphEngine::new();
                self.interaction.clear_selection();
                self.selected_connection = None;
                self.pan_offset = Vec2::ZERO;
                self.zoom = 1.0;
                self.file_manager.new_file();
            }
            MenuAction::OpenFile => match self.file_manager.open_file_dialog() {
                Ok(Some((graph, viewport))) => {
                    self.graph = graph;
                    self.graph.update_all_socket_positions();
                    self.engine = GraphEngine::new();
                    self.interaction.clear_selection();
                    self.selected_connection = None;
                    self.pan_offset = viewport.pan();
                    self.zoom = viewport.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
                }
                Ok(None) => {}
                Err(e) => error!("failed to open file: {}", e),
            },
            MenuAction::SaveFile => {
                if let Err(e) = self.file_manager.save_file(&self.graph, self.pan_offset, self.zoom)
                {
                    error!("failed to save file: {}", e);
                }
            }
            MenuAction::SaveFileAs => {
                if let Err(e) =
                    self.file_manager
                        .save_as_file_dialog(&self.graph, self.pan_offset, self.zoom)
                {
                    error!("failed to save file: {}", e);
                }
            }
            MenuAction::CreateNode(node_type) => {
                self.create_node(&node_type, canvas_center_world);
            }
        }
    }

    /// A press on an occupied socket detaches its wire before anything else,
    /// so dragging from a connected socket re-routes instead of erroring.
    fn detach_if_occupied(&mut self, node_id: NodeId, socket_id: usize, kind: SocketKind) {
        if let Some(removed) = self.graph.disconnect_socket(node_id, socket_id, kind) {
            self.engine.invalidate_order();
            self.engine.mark_dirty(removed.to_node, &self.graph);
            self.selected_connection = None;
            self.file_manager.mark_modified();
        }
    }

    fn handle_drag_start(&mut self) {
        let click_radius = theme::dimensions().socket_click_radius / self.zoom;
        if let Some((node_id, socket_id, kind)) =
            self.input_state.find_socket_at(&self.graph, click_radius)
        {
            self.detach_if_occupied(node_id, socket_id, kind);
            self.input_state.start_connection(node_id, socket_id, kind);
        } else if let Some(node_id) = self.input_state.find_node_under_mouse(&self.graph) {
            let multi = self.input_state.modifiers.shift || self.input_state.modifiers.command;
            if !self.interaction.is_selected(node_id) || multi {
                self.interaction.select_node(node_id, multi);
            }
            self.selected_connection = None;
            if let Some(pos) = self.input_state.mouse_world_pos {
                self.interaction.start_drag(pos, &self.graph);
            }
        }
    }

    fn handle_drag_stop(&mut self) {
        if self.input_state.is_connecting() {
            let connect_radius = theme::dimensions().socket_connect_radius / self.zoom;
            let origin = self.input_state.connecting_from();
            let target = self.input_state.find_socket_at(&self.graph, connect_radius);

            match (origin, target) {
                (Some((from_node, _, from_kind)), Some((to_node, to_socket, to_kind)))
                    if from_node != to_node
                        && from_kind != to_kind
                        && self.graph.is_socket_free(to_node, to_socket, to_kind) =>
                {
                    if let Some(connection) =
                        self.input_state.complete_connection(to_node, to_socket, to_kind)
                    {
                        match self.graph.add_connection(connection) {
                            Ok(()) => {
                                self.engine.invalidate_order();
                                self.engine.mark_dirty(connection.to_node, &self.graph);
                                self.file_manager.mark_modified();
                            }
                            Err(e) => warn!("connection rejected: {}", e),
                        }
                    }
                }
                _ => self.input_state.cancel_connection(),
            }
        }

        if self.interaction.is_dragging() {
            self.interaction.end_drag();
            self.file_manager.mark_modified();
        }
    }

    fn handle_click(&mut self) {
        let click_radius = theme::dimensions().socket_click_radius / self.zoom;
        if let Some((node_id, socket_id, kind)) =
            self.input_state.find_socket_at(&self.graph, click_radius)
        {
            // Plain click on a connected socket detaches its wire.
            self.detach_if_occupied(node_id, socket_id, kind);
        } else if let Some(node_id) = self.input_state.find_node_under_mouse(&self.graph) {
            let multi = self.input_state.modifiers.shift || self.input_state.modifiers.command;
            self.interaction.select_node(node_id, multi);
            self.selected_connection = None;
        } else if let Some(pos) = self.input_state.click_pos {
            let wire_radius = theme::dimensions().wire_click_radius / self.zoom;
            self.selected_connection = rendering::find_connection_at(&self.graph, pos, wire_radius);
            self.interaction.clear_selection();
        } else {
            self.interaction.clear_selection();
            self.selected_connection = None;
        }
    }

    fn delete_selection(&mut self) {
        if let Some(index) = self.selected_connection.take() {
            if let Some(removed) = self.graph.remove_connection(index) {
                self.engine.invalidate_order();
                self.engine.mark_dirty(removed.to_node, &self.graph);
                self.file_manager.mark_modified();
            }
        }

        if !self.interaction.selected_nodes.is_empty() {
            // Collect downstream nodes before removal so they can be re-marked.
            let mut downstream: Vec<NodeId> = Vec::new();
            for &node_id in &self.interaction.selected_nodes {
                downstream.extend(self.graph.downstream_of(node_id));
            }

            let removed = self.interaction.delete_selected(&mut self.graph);
            if !removed.is_empty() {
                self.engine.invalidate_order();
                // Wire indices shifted with the removed nodes.
                self.selected_connection = None;
                for node_id in downstream {
                    if self.graph.nodes.contains_key(&node_id) {
                        self.engine.mark_dirty(node_id, &self.graph);
                    }
                }
                self.file_manager.mark_modified();
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (delete, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if delete {
            self.delete_selection();
        }
        if escape {
            self.input_state.cancel_connection();
            self.interaction.clear_selection();
            self.selected_connection = None;
            self.input_state.close_context_menu();
        }
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        painter.rect_filled(response.rect, 0.0, theme::colors().canvas_background);

        let origin = response.rect.min.to_vec2();
        let zoom = self.zoom;
        let pan = self.pan_offset + origin;
        let transform = move |p: Pos2| Pos2::new(p.x * zoom, p.y * zoom) + pan;
        let inverse = move |p: Pos2| {
            let q = p - pan;
            Pos2::new(q.x / zoom, q.y / zoom)
        };

        self.input_state.update(ui, &response, inverse);

        // Viewport: pan with the middle button, zoom around the pointer
        if let Some(delta) = self.input_state.get_pan_delta(&response) {
            self.pan_offset += delta;
        }
        let zoom_delta = self.input_state.get_zoom_delta();
        if zoom_delta != 0.0 {
            if let Some(mouse) = self.input_state.mouse_pos {
                let old_zoom = self.zoom;
                let new_zoom = (old_zoom * (1.0 + zoom_delta)).clamp(MIN_ZOOM, MAX_ZOOM);
                // Keep the world point under the pointer fixed while zooming.
                let mouse_rel = mouse - response.rect.min;
                self.pan_offset =
                    mouse_rel - (mouse_rel - self.pan_offset) * (new_zoom / old_zoom);
                self.zoom = new_zoom;
            }
        }

        if self.input_state.drag_started_this_frame && !self.input_state.is_panning {
            self.handle_drag_start();
        }
        if self.interaction.is_dragging() {
            if let Some(pos) = self.input_state.mouse_world_pos {
                self.interaction.update_drag(pos, &mut self.graph);
            }
        }
        if self.input_state.drag_stopped_this_frame {
            self.handle_drag_stop();
        }
        if self.input_state.clicked_this_frame {
            self.handle_click();
        }

        rendering::draw_connections(
            &painter,
            &self.graph,
            self.selected_connection,
            self.zoom,
            transform,
        );
        if let Some((node_id, socket_id, kind)) = self.input_state.connecting_from() {
            let socket_pos = self.graph.nodes.get(&node_id).and_then(|node| match kind {
                SocketKind::Input => node.inputs.get(socket_id).map(|s| s.position),
                SocketKind::Output => node.outputs.get(socket_id).map(|s| s.position),
            });
            if let (Some(from), Some(to)) = (socket_pos, self.input_state.mouse_pos) {
                rendering::draw_preview_wire(&painter, transform(from), to, self.zoom);
            }
        }
        rendering::draw_nodes(
            &painter,
            &self.graph,
            &self.interaction.selected_nodes,
            self.zoom,
            transform,
        );
    }
}

impl Default for NodeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for NodeEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let window_title = format!("flowgrid — {}", self.file_manager.get_file_display_name());
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title.clone()));

        let menu_action = menus::render_menu_bar(ctx, &window_title);

        let mut canvas_center_world = Pos2::ZERO;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let center = rect.center() - rect.min.to_vec2();
                canvas_center_world =
                    Pos2::new(center.x - self.pan_offset.x, center.y - self.pan_offset.y)
                        / self.zoom;
                self.render_canvas(ui);
            });

        if let Some(action) = menu_action {
            self.handle_menu_action(action, canvas_center_world);
        }

        if self.input_state.should_show_context_menu() {
            if let (Some(menu_pos), Some(world_pos)) = (
                self.input_state.context_menu_pos,
                self.input_state.right_click_world_pos,
            ) {
                let (chosen, close) = menus::render_context_menu(ctx, menu_pos);
                if let Some(node_type) = chosen {
                    self.create_node(&node_type, world_pos);
                }
                if close {
                    self.input_state.close_context_menu();
                }
            }
        }

        // Parameter panel for the single selected node
        if let Some(node_id) = self.interaction.single_selection() {
            let changed = match self.graph.nodes.get_mut(&node_id) {
                Some(node) => self.parameter_panel.render(ctx, node),
                None => false,
            };
            if changed {
                self.engine.mark_dirty(node_id, &self.graph);
                self.file_manager.mark_modified();
            }
        }

        self.handle_keyboard(ctx);

        if let Err(e) = self.engine.evaluate_dirty(&mut self.graph) {
            warn!("evaluation skipped: {}", e);
        }
    }
}
