//! File management for the node editor
//!
//! Handles saving, loading, and file state tracking for node graphs.

use crate::nodes::NodeGraph;
use egui::Vec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Save file data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: String,
    pub metadata: SaveMetadata,
    pub viewport: ViewportData,
    pub graph: NodeGraph,
}

/// Metadata for save files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub creator: String,
    pub description: String,
}

/// Viewport state for save files
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportData {
    pub pan_offset: [f32; 2],
    pub zoom: f32,
}

impl ViewportData {
    pub fn pan(&self) -> Vec2 {
        Vec2::new(self.pan_offset[0], self.pan_offset[1])
    }
}

/// Manages file operations for the node editor
pub struct FileManager {
    /// Current file path (None if unsaved/new file)
    current_file_path: Option<PathBuf>,
    /// Whether the graph has been modified since last save
    is_modified: bool,
}

impl FileManager {
    pub fn new() -> Self {
        Self {
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn current_file_path(&self) -> Option<&PathBuf> {
        self.current_file_path.as_ref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.is_modified
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Display name for the window title, with a `*` for unsaved changes
    pub fn get_file_display_name(&self) -> String {
        let name = match &self.current_file_path {
            Some(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Unknown")
                .to_string(),
            None => "Untitled".to_string(),
        };
        if self.is_modified {
            format!("{}*", name)
        } else {
            name
        }
    }

    /// Create a new file (reset state)
    pub fn new_file(&mut self) {
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// Save the given graph and viewport to a file
    pub fn save_to_file(
        &mut self,
        file_path: &Path,
        graph: &NodeGraph,
        pan_offset: Vec2,
        zoom: f32,
    ) -> Result<(), String> {
        let save_data = SaveData {
            version: "1.0".to_string(),
            metadata: SaveMetadata {
                creator: "flowgrid 0.1".to_string(),
                description: "Node graph created with flowgrid".to_string(),
            },
            viewport: ViewportData {
                pan_offset: [pan_offset.x, pan_offset.y],
                zoom,
            },
            graph: graph.clone(),
        };

        let json_content = serde_json::to_string_pretty(&save_data)
            .map_err(|e| format!("Failed to serialize save data: {}", e))?;

        std::fs::write(file_path, json_content)
            .map_err(|e| format!("Failed to write file: {}", e))?;

        self.current_file_path = Some(file_path.to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Load a graph from a file
    pub fn load_from_file(&mut self, file_path: &Path) -> Result<(NodeGraph, ViewportData), String> {
        let file_content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read file: {}", e))?;

        let save_data: SaveData = serde_json::from_str(&file_content)
            .map_err(|e| format!("Failed to parse save file: {}", e))?;

        self.current_file_path = Some(file_path.to_path_buf());
        self.is_modified = false;

        Ok((save_data.graph, save_data.viewport))
    }

    /// Save to the current path, if one is set
    pub fn save_file(&mut self, graph: &NodeGraph, pan_offset: Vec2, zoom: f32) -> Result<bool, String> {
        match self.current_file_path.clone() {
            Some(path) => self.save_to_file(&path, graph, pan_offset, zoom).map(|_| true),
            None => self.save_as_file_dialog(graph, pan_offset, zoom),
        }
    }

    /// Open file dialog and load the selected file
    pub fn open_file_dialog(&mut self) -> Result<Option<(NodeGraph, ViewportData)>, String> {
        use rfd::FileDialog;

        if let Some(path) = FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        {
            self.load_from_file(&path).map(Some)
        } else {
            Ok(None) // User cancelled dialog
        }
    }

    /// Save-as file dialog. Returns false when the user cancels.
    pub fn save_as_file_dialog(
        &mut self,
        graph: &NodeGraph,
        pan_offset: Vec2,
        zoom: f32,
    ) -> Result<bool, String> {
        use rfd::FileDialog;

        if let Some(path) = FileDialog::new()
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.save_to_file(&path, graph, pan_offset, zoom).map(|_| true)
        } else {
            Ok(false)
        }
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::data::InputNode;
    use crate::nodes::NodeFactory;
    use egui::Pos2;

    #[test]
    fn test_save_and_load_round_trip() {
        let mut graph = NodeGraph::new();
        graph.add_node(InputNode::create(Pos2::new(40.0, 30.0)));

        let dir = std::env::temp_dir();
        let path = dir.join("flowgrid_file_manager_test.json");

        let mut manager = FileManager::new();
        manager
            .save_to_file(&path, &graph, Vec2::new(5.0, -3.0), 1.5)
            .expect("save succeeds");
        assert!(!manager.has_unsaved_changes());
        assert_eq!(manager.get_file_display_name(), "flowgrid_file_manager_test.json");

        let (loaded, viewport) = manager.load_from_file(&path).expect("load succeeds");
        assert_eq!(loaded.nodes.len(), 1);
        assert_eq!(viewport.zoom, 1.5);
        assert_eq!(viewport.pan(), Vec2::new(5.0, -3.0));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_modified_flag_in_display_name() {
        let mut manager = FileManager::new();
        assert_eq!(manager.get_file_display_name(), "Untitled");
        manager.mark_modified();
        assert_eq!(manager.get_file_display_name(), "Untitled*");
    }
}
