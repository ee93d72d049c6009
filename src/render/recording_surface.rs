use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, CirclePrimitive, DrawCommand, DrawSurface, LinePrimitive, PathPrimitive,
    RectPrimitive, TextPrimitive,
};

/// Headless surface that records every command it receives.
///
/// It still validates each primitive so tests catch invalid geometry before
/// it reaches a real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Path(_)))
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Circle(_)))
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Text(_)))
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Hands back the recorded commands and starts a new recording.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    fn record(&mut self, command: DrawCommand) -> ChartResult<()> {
        command.validate()?;
        self.commands.push(command);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Line(*line))
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Rect(*rect))
    }

    fn draw_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Arc(*arc))
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Circle(*circle))
    }

    fn draw_path(&mut self, path: &PathPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Path(path.clone()))
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.record(DrawCommand::Text(text.clone()))
    }
}
