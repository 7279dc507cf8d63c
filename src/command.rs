use crate::vertex::VertexArray;
use vek::*;

/// Fill the framebuffer's color and/or depth planes with constants.
///
/// Either plane may be cleared independently; a field left `None` leaves that
/// plane untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClearCommand {
    pub color: Option<Rgba<f32>>,
    pub depth: Option<f32>,
}

impl ClearCommand {
    /// Clear both planes.
    pub fn all(color: Rgba<f32>, depth: f32) -> Self {
        Self {
            color: Some(color),
            depth: Some(depth),
        }
    }
}

/// Run the full triangle pipeline over `vertex_count / 3` triangles.
///
/// `vertex_count` must be a multiple of 3 (triangle list).
#[derive(Copy, Clone, Debug)]
pub struct DrawCommand {
    pub vertex_array: VertexArray,
    pub vertex_count: u32,
    pub program: usize,
    pub backface_culling: bool,
}

#[derive(Copy, Clone, Debug)]
pub enum Command {
    Clear(ClearCommand),
    Draw(DrawCommand),
}

/// An ordered sequence of commands, appended during construction and
/// read-only while executing. Commands run strictly in the order they were
/// recorded.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<Command>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Record a clear.
    pub fn clear(&mut self, clear: ClearCommand) {
        self.push(Command::Clear(clear));
    }

    /// Record a draw.
    pub fn draw(&mut self, draw: DrawCommand) {
        self.push(Command::Draw(draw));
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
