//! Whiteboard sketch model.
//!
//! The bitmap itself lives in the browser canvas. This module holds the
//! stored payload, the brush settings and the pen state machine that decides
//! which segments get painted and when the bitmap must be re-serialized.

use serde::{Deserialize, Serialize};

use super::logic_map::Point;

/// Serialized bitmap (PNG data URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sketch(String);

impl Sketch {
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn data_url(&self) -> &str {
        &self.0
    }
}

/// File name used when downloading an entry's sketch
pub fn export_file_name(task_name: &str) -> String {
    format!("{}-whiteboard.png", task_name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Draw,
    /// Paints white over the bitmap; no alpha erasure
    Erase,
}

impl Tool {
    pub fn stroke_color(&self) -> &'static str {
        match self {
            Tool::Draw => "#000000",
            Tool::Erase => "#ffffff",
        }
    }

    /// Line width given the configured draw and erase widths
    pub fn line_width(&self, draw_width: f64, erase_width: f64) -> f64 {
        match self {
            Tool::Draw => draw_width,
            Tool::Erase => erase_width,
        }
    }
}

/// Pen state for one canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokePen {
    last: Option<Point>,
}

impl StrokePen {
    pub fn is_down(&self) -> bool {
        self.last.is_some()
    }

    /// Pointer down: start a new path
    pub fn press(&mut self, at: Point) {
        self.last = Some(at);
    }

    /// Pointer move: the segment to paint, if a stroke is active
    pub fn drag(&mut self, to: Point) -> Option<(Point, Point)> {
        let from = self.last?;
        self.last = Some(to);
        Some((from, to))
    }

    /// Pointer up or leave. Returns true when a stroke ended, i.e. the
    /// bitmap changed and must be serialized into the entry.
    pub fn release(&mut self) -> bool {
        self.last.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_paints_only_while_down() {
        let mut pen = StrokePen::default();
        assert_eq!(pen.drag(Point::new(1.0, 1.0)), None);

        pen.press(Point::new(0.0, 0.0));
        assert_eq!(
            pen.drag(Point::new(3.0, 4.0)),
            Some((Point::new(0.0, 0.0), Point::new(3.0, 4.0)))
        );
        assert_eq!(
            pen.drag(Point::new(5.0, 5.0)),
            Some((Point::new(3.0, 4.0), Point::new(5.0, 5.0)))
        );
        assert!(pen.release());
        assert!(!pen.is_down());
    }

    #[test]
    fn test_leave_without_stroke_does_not_save() {
        let mut pen = StrokePen::default();
        assert!(!pen.release());
    }

    #[test]
    fn test_tools() {
        assert_eq!(Tool::Draw.stroke_color(), "#000000");
        assert_eq!(Tool::Erase.stroke_color(), "#ffffff");
        assert_eq!(Tool::Draw.line_width(2.0, 20.0), 2.0);
        assert_eq!(Tool::Erase.line_width(2.0, 20.0), 20.0);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("UI Design"), "UI Design-whiteboard.png");
    }
}
