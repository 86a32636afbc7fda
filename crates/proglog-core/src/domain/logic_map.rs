//! Logic Map
//!
//! A small directed graph of labelled nodes laid out on a 2D canvas.
//!
//! Edges live on their source node as an ordered, duplicate-free list of
//! target ids. Deleting a node does not prune edges pointing at it; such
//! dangling edges are skipped when edges are resolved for display.

use serde::{Deserialize, Serialize};

use super::id::next_id;

/// Canvas-relative position in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pick a point inside `origin .. origin + extent`.
    ///
    /// `unit` must yield values in `[0, 1)`, e.g. `Math.random`.
    pub fn random_within(origin: Point, extent: Point, mut unit: impl FnMut() -> f64) -> Self {
        Self {
            x: origin.x + unit() * extent.x,
            y: origin.y + unit() * extent.y,
        }
    }

    /// Clamp into `[0, max.x] x [0, max.y]`; negative maxima collapse to 0.
    pub fn clamped(self, max: Point) -> Self {
        Self {
            x: self.x.min(max.x).max(0.0),
            y: self.y.min(max.y).max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: u32,
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Outgoing edges (target node ids)
    pub connections: Vec<u32>,
}

impl GraphNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Node set of one entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogicMap {
    nodes: Vec<GraphNode>,
}

impl LogicMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Append a node with no connections. Blank labels are ignored.
    pub fn add_node(&mut self, label: &str, at: Point) -> Option<u32> {
        if label.trim().is_empty() {
            return None;
        }
        let id = next_id();
        self.nodes.push(GraphNode {
            id,
            label: label.to_string(),
            x: at.x,
            y: at.y,
            connections: Vec::new(),
        });
        log::debug!("logic map: added node {} '{}'", id, label);
        Some(id)
    }

    /// Remove a node. Edges held by other nodes that point at it are kept.
    pub fn delete_node(&mut self, id: u32) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        let removed = self.nodes.len() != before;
        if removed {
            log::debug!("logic map: deleted node {}", id);
        }
        removed
    }

    /// Add the directed edge `from -> to`.
    ///
    /// Returns false when the source is missing or the edge already exists.
    pub fn connect(&mut self, from: u32, to: u32) -> bool {
        match self.get_mut(from) {
            Some(node) if !node.connections.contains(&to) => {
                node.connections.push(to);
                log::debug!("logic map: connected {} -> {}", from, to);
                true
            }
            _ => false,
        }
    }

    /// Remove the directed edge `from -> to`
    pub fn disconnect(&mut self, from: u32, to: u32) -> bool {
        let Some(node) = self.get_mut(from) else {
            return false;
        };
        let before = node.connections.len();
        node.connections.retain(|&c| c != to);
        let removed = node.connections.len() != before;
        if removed {
            log::debug!("logic map: disconnected {} -> {}", from, to);
        }
        removed
    }

    /// Set a node's position
    pub fn move_node(&mut self, id: u32, to: Point) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.x = to.x;
                node.y = to.y;
                true
            }
            None => false,
        }
    }

    /// Every edge whose both ends exist, as `(source, target)`
    pub fn edges(&self) -> Vec<(&GraphNode, &GraphNode)> {
        self.nodes
            .iter()
            .flat_map(|source| {
                source
                    .connections
                    .iter()
                    .filter_map(move |&t| self.get(t).map(|target| (source, target)))
            })
            .collect()
    }

    /// Targets of `id` that still exist, in connection order
    pub fn resolved_targets(&self, id: u32) -> Vec<&GraphNode> {
        self.get(id)
            .map(|node| node.connections.iter().filter_map(|&t| self.get(t)).collect())
            .unwrap_or_default()
    }
}

/// Result of clicking a node in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The node is now the pending edge source
    Selected(u32),
    /// An edge was added and the selection cleared
    Connected { from: u32, to: u32 },
    /// The edge already existed (or the source is gone); selection cleared
    Unchanged,
}

/// The single "selection" slot used to build edges by clicking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeSelection(Option<u32>);

impl NodeSelection {
    pub fn selected(&self) -> Option<u32> {
        self.0
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.0 == Some(id)
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Apply a click on `node`.
    ///
    /// Empty selection or the same node selects it; a different node connects
    /// selection -> node and clears the selection.
    pub fn click(&mut self, map: &mut LogicMap, node: u32) -> ClickOutcome {
        match self.0 {
            Some(from) if from != node => {
                self.0 = None;
                if map.connect(from, node) {
                    ClickOutcome::Connected { from, to: node }
                } else {
                    ClickOutcome::Unchanged
                }
            }
            _ => {
                self.0 = Some(node);
                ClickOutcome::Selected(node)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_nodes() -> (LogicMap, u32, u32) {
        let mut map = LogicMap::new();
        let a = map.add_node("A", Point::new(10.0, 10.0)).unwrap();
        let b = map.add_node("B", Point::new(200.0, 80.0)).unwrap();
        (map, a, b)
    }

    #[test]
    fn test_add_node_ignores_blank_label() {
        let mut map = LogicMap::new();
        assert!(map.add_node("   ", Point::default()).is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_click_select_then_connect() {
        let (mut map, a, b) = two_nodes();
        let mut sel = NodeSelection::default();

        assert_eq!(sel.click(&mut map, a), ClickOutcome::Selected(a));
        assert_eq!(sel.click(&mut map, b), ClickOutcome::Connected { from: a, to: b });
        assert_eq!(sel.selected(), None);
        assert_eq!(map.get(a).unwrap().connections, vec![b]);

        assert!(map.disconnect(a, b));
        assert!(map.get(a).unwrap().connections.is_empty());
    }

    #[test]
    fn test_connect_is_idempotent() {
        let (mut map, a, b) = two_nodes();
        assert!(map.connect(a, b));
        assert!(!map.connect(a, b));
        assert_eq!(map.get(a).unwrap().connections, vec![b]);

        let mut sel = NodeSelection::default();
        sel.click(&mut map, a);
        assert_eq!(sel.click(&mut map, b), ClickOutcome::Unchanged);
        assert_eq!(map.get(a).unwrap().connections.len(), 1);
    }

    #[test]
    fn test_edges_are_directed() {
        let (mut map, a, b) = two_nodes();
        map.connect(a, b);
        assert!(map.get(b).unwrap().connections.is_empty());
        let edges: Vec<_> = map.edges().iter().map(|(s, t)| (s.id, t.id)).collect();
        assert_eq!(edges, vec![(a, b)]);
    }

    #[test]
    fn test_same_node_click_reselects() {
        let (mut map, a, _) = two_nodes();
        let mut sel = NodeSelection::default();
        sel.click(&mut map, a);
        assert_eq!(sel.click(&mut map, a), ClickOutcome::Selected(a));
        assert!(sel.is_selected(a));
        assert!(map.get(a).unwrap().connections.is_empty());
    }

    #[test]
    fn test_delete_node_leaves_dangling_edges() {
        let (mut map, a, b) = two_nodes();
        map.connect(a, b);
        assert!(map.delete_node(b));

        assert!(map.get(b).is_none());
        // The edge is still recorded on A...
        assert_eq!(map.get(a).unwrap().connections, vec![b]);
        // ...but is skipped when resolving for display.
        assert!(map.edges().is_empty());
        assert!(map.resolved_targets(a).is_empty());
    }

    #[test]
    fn test_click_from_deleted_selection_is_noop() {
        let (mut map, a, b) = two_nodes();
        let mut sel = NodeSelection::default();
        sel.click(&mut map, a);
        map.delete_node(a);
        assert_eq!(sel.click(&mut map, b), ClickOutcome::Unchanged);
        assert_eq!(sel.selected(), None);
        assert!(map.get(b).unwrap().connections.is_empty());
    }

    #[test]
    fn test_new_node_never_reuses_deleted_id() {
        let (mut map, a, b) = two_nodes();
        map.connect(a, b);
        map.delete_node(b);
        let c = map.add_node("C", Point::default()).unwrap();
        assert_ne!(c, b);
        assert!(map.resolved_targets(a).is_empty());
    }

    #[test]
    fn test_move_node() {
        let (mut map, a, _) = two_nodes();
        assert!(map.move_node(a, Point::new(42.0, 7.0)));
        assert_eq!(map.get(a).unwrap().position(), Point::new(42.0, 7.0));
        assert!(!map.move_node(9999, Point::default()));
    }

    #[test]
    fn test_point_helpers() {
        let max = Point::new(450.0, 340.0);
        assert_eq!(Point::new(-5.0, 500.0).clamped(max), Point::new(0.0, 340.0));
        assert_eq!(Point::new(12.0, 30.0).clamped(max), Point::new(12.0, 30.0));

        let mut values = [0.0, 0.999].into_iter();
        let p = Point::random_within(Point::new(50.0, 50.0), Point::new(400.0, 300.0), || {
            values.next().unwrap_or(0.0)
        });
        assert_eq!(p.x, 50.0);
        assert!(p.y < 350.0 && p.y > 349.0);
    }

    #[test]
    fn test_serializes_as_node_list() {
        let (map, _, _) = two_nodes();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json.as_array().map(|a| a.len()), Some(2));
    }
}
