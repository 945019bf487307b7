//! Canvas painting for nodes, sockets, and connection wires

use crate::nodes::math_utils::distance_to_bezier_curve;
use crate::nodes::{NodeGraph, NodeKind, SocketKind, Value};
use crate::theme;
use egui::epaint::CubicBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use std::collections::HashSet;

/// Control polygon for a wire between two socket positions (vertical flow:
/// wires leave the bottom of a node and enter the top of the next).
pub fn wire_control_points(from: Pos2, to: Pos2, zoom: f32) -> [Pos2; 4] {
    let vertical_distance = (to.y - from.y).abs();
    let control_offset = if vertical_distance > 10.0 {
        vertical_distance * 0.4
    } else {
        60.0 * zoom // Minimum offset for short connections
    };

    [
        from,
        from + Vec2::new(0.0, control_offset),
        to - Vec2::new(0.0, control_offset),
        to,
    ]
}

/// Find the connection whose curve passes near the given world position.
pub fn find_connection_at(graph: &NodeGraph, pos: Pos2, radius: f32) -> Option<usize> {
    for (idx, connection) in graph.connections.iter().enumerate() {
        let (Some(from_node), Some(to_node)) = (
            graph.nodes.get(&connection.from_node),
            graph.nodes.get(&connection.to_node),
        ) else {
            continue;
        };
        let (Some(from_socket), Some(to_socket)) = (
            from_node.outputs.get(connection.from_socket),
            to_node.inputs.get(connection.to_socket),
        ) else {
            continue;
        };

        let [p0, p1, p2, p3] = wire_control_points(from_socket.position, to_socket.position, 1.0);
        if distance_to_bezier_curve(pos, p0, p1, p2, p3) <= radius {
            return Some(idx);
        }
    }
    None
}

/// Draw all connection wires
pub fn draw_connections(
    painter: &Painter,
    graph: &NodeGraph,
    selected_connection: Option<usize>,
    zoom: f32,
    transform: impl Fn(Pos2) -> Pos2,
) {
    for (idx, connection) in graph.connections.iter().enumerate() {
        let (Some(from_node), Some(to_node)) = (
            graph.nodes.get(&connection.from_node),
            graph.nodes.get(&connection.to_node),
        ) else {
            continue;
        };
        let (Some(from_socket), Some(to_socket)) = (
            from_node.outputs.get(connection.from_socket),
            to_node.inputs.get(connection.to_socket),
        ) else {
            continue;
        };

        let points = wire_control_points(
            transform(from_socket.position),
            transform(to_socket.position),
            zoom,
        );

        let (width, color) = if selected_connection == Some(idx) {
            (2.0 * theme::dimensions().wire_width * zoom, theme::colors().node_border_selected)
        } else {
            (theme::dimensions().wire_width * zoom, theme::colors().wire)
        };

        painter.add(egui::Shape::CubicBezier(CubicBezierShape {
            points,
            closed: false,
            fill: Color32::TRANSPARENT,
            stroke: Stroke::new(width, color).into(),
        }));
    }
}

/// Draw the wire being dragged from a socket to the mouse
pub fn draw_preview_wire(painter: &Painter, from: Pos2, to: Pos2, zoom: f32) {
    let points = wire_control_points(from, to, zoom);
    painter.add(egui::Shape::CubicBezier(CubicBezierShape {
        points,
        closed: false,
        fill: Color32::TRANSPARENT,
        stroke: Stroke::new(
            theme::dimensions().wire_width * zoom,
            theme::colors().wire_preview,
        )
        .into(),
    }));
}

/// Draw all nodes with their sockets and inline text
pub fn draw_nodes(
    painter: &Painter,
    graph: &NodeGraph,
    selected_nodes: &HashSet<crate::nodes::NodeId>,
    zoom: f32,
    transform: impl Fn(Pos2) -> Pos2,
) {
    let colors = theme::colors();
    let dims = theme::dimensions();

    for (node_id, node) in &graph.nodes {
        let node_rect = node.get_rect();
        let rect = Rect::from_two_pos(transform(node_rect.min), transform(node_rect.max));

        // Node body
        painter.rect_filled(rect, dims.corner_radius * zoom, node.color);

        let selected = selected_nodes.contains(node_id);
        let (border_width, border_color) = if selected {
            (dims.border_width * 1.5, colors.node_border_selected)
        } else {
            (dims.border_width, colors.node_border)
        };
        painter.rect_stroke(
            rect,
            dims.corner_radius * zoom,
            Stroke::new(border_width * zoom, border_color),
        );

        // Title
        painter.text(
            transform(node.position + Vec2::new(node.size.x / 2.0, 15.0)),
            egui::Align2::CENTER_CENTER,
            &node.title,
            egui::FontId::proportional(12.0 * zoom),
            colors.node_title,
        );

        // Second line: literal, op, item count, or the printed result
        let subtitle_color = match (&node.kind, &node.result) {
            (NodeKind::Print, Value::Error(_)) => colors.error_text,
            (NodeKind::Print, _) => colors.result_text,
            _ => colors.node_subtitle,
        };
        painter.text(
            transform(node.position + Vec2::new(node.size.x / 2.0, 38.0)),
            egui::Align2::CENTER_CENTER,
            node.subtitle(),
            egui::FontId::proportional(10.0 * zoom),
            subtitle_color,
        );

        // Sockets: free and connected sockets are tinted differently
        let socket_radius = dims.socket_radius * zoom;
        for socket in node.inputs.iter().chain(node.outputs.iter()) {
            let free = graph.is_socket_free(*node_id, socket.id, socket.kind);
            let color = if free {
                colors.socket_free
            } else {
                colors.socket_connected
            };
            painter.circle_filled(transform(socket.position), socket_radius, color);

            let label_offset = match socket.kind {
                SocketKind::Input => Vec2::new(0.0, -10.0),
                SocketKind::Output => Vec2::new(0.0, 10.0),
            };
            painter.text(
                transform(socket.position) + label_offset * zoom,
                egui::Align2::CENTER_CENTER,
                &socket.name,
                egui::FontId::proportional(8.0 * zoom),
                colors.node_subtitle,
            );
        }
    }
}
