use serde::{Deserialize, Serialize};

use crate::core::Bounds;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, DrawSurface, LinePrimitive, PathPrimitive, RectPrimitive,
    TextPrimitive,
};

/// One call against a [`DrawSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Arc(ArcPrimitive),
    Circle(CirclePrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Path(path) => path.validate(),
            Self::Text(text) => text.validate(),
        }
    }

    pub fn issue(&self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        match self {
            Self::Line(line) => surface.draw_line(line),
            Self::Rect(rect) => surface.draw_rect(rect),
            Self::Arc(arc) => surface.draw_arc(arc),
            Self::Circle(circle) => surface.draw_circle(circle),
            Self::Path(path) => surface.draw_path(path),
            Self::Text(text) => surface.draw_text(text),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Commands keep their insertion order so later marks paint over earlier
/// ones (grid below bars, markers below their labels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub bounds: Bounds,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_arc(&mut self, arc: ArcPrimitive) {
        self.commands.push(DrawCommand::Arc(arc));
    }

    pub fn push_circle(&mut self, circle: CirclePrimitive) {
        self.commands.push(DrawCommand::Circle(circle));
    }

    pub fn push_path(&mut self, path: PathPrimitive) {
        self.commands.push(DrawCommand::Path(path));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push_line(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push_text(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push_rect(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.bounds.is_valid() {
            return Err(ChartError::InvalidBounds {
                width: self.bounds.width(),
                height: self.bounds.height(),
            });
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Issues every command against `surface`, in order.
    pub fn replay(&self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        for command in &self.commands {
            command.issue(surface)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn lines(&self) -> Vec<&LinePrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn rects(&self) -> Vec<&RectPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn arcs(&self) -> Vec<&ArcPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Arc(arc) => Some(arc),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn circles(&self) -> Vec<&CirclePrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<&PathPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Path(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}
