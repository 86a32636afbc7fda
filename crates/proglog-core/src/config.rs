//! Dashboard configuration.
//!
//! Every field has a default, so a partial JSON document overrides only what
//! it names.

use serde::Deserialize;

use crate::domain::Point;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub whiteboard: WhiteboardConfig,
    pub logic_map: LogicMapConfig,
    /// How long a toast stays visible
    pub toast_millis: u32,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    /// Start every dashboard with the sample entries
    pub seed_entries: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            whiteboard: WhiteboardConfig::default(),
            logic_map: LogicMapConfig::default(),
            toast_millis: 2500,
            log_level: "info".to_string(),
            seed_entries: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed `log_level`, `Info` when unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    pub width: u32,
    pub height: u32,
    pub draw_width: f64,
    pub erase_width: f64,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            draw_width: 2.0,
            erase_width: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogicMapConfig {
    pub width: f64,
    pub height: f64,
    pub node_width: f64,
    pub node_height: f64,
    pub spawn_origin: Point,
    pub spawn_extent: Point,
}

impl Default for LogicMapConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            node_width: 150.0,
            node_height: 60.0,
            spawn_origin: Point::new(50.0, 50.0),
            spawn_extent: Point::new(400.0, 300.0),
        }
    }
}

impl LogicMapConfig {
    /// Largest top-left corner a node may take inside a container of the
    /// given size
    pub fn max_position(&self, container_width: f64, container_height: f64) -> Point {
        Point::new(container_width - self.node_width, container_height - self.node_height)
    }

    /// Anchor point for edge lines (roughly the centre of the label row)
    pub fn anchor_offset(&self) -> Point {
        Point::new(60.0, 20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.whiteboard.width, 800);
        assert_eq!(config.whiteboard.height, 500);
        assert_eq!(config.logic_map.node_width, 150.0);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = DashboardConfig::from_json(
            r#"{ "log_level": "debug", "whiteboard": { "width": 1024 }, "seed_entries": false }"#,
        )
        .unwrap();
        assert_eq!(config.whiteboard.width, 1024);
        assert_eq!(config.whiteboard.height, 500);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert!(!config.seed_entries);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = DashboardConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(DashboardConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn test_max_position() {
        let lm = LogicMapConfig::default();
        assert_eq!(lm.max_position(600.0, 400.0), Point::new(450.0, 340.0));
    }
}
