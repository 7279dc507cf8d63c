use crate::buffer::Buffer;
use crate::framebuffer::Framebuffer;
use crate::shader::Program;
use crate::texture::Texture;
use crate::uniform::UniformTable;

/// Slots available in a freshly created uniform table.
pub const DEFAULT_UNIFORM_SLOTS: usize = 1024;

/// Everything visible to the pipeline while a command buffer executes: data
/// buffers, textures, shader programs, the shared uniform table and the
/// output framebuffer.
///
/// Buffers and textures are read-only during execution; the uniform table is
/// read by shaders and the framebuffer is the only thing commands write.
#[derive(Clone, Debug)]
pub struct Memory {
    pub buffers: Vec<Buffer>,
    pub textures: Vec<Texture>,
    pub programs: Vec<Program>,
    pub uniforms: UniformTable,
    pub framebuffer: Framebuffer,
}

impl Memory {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffers: Vec::new(),
            textures: Vec::new(),
            programs: Vec::new(),
            uniforms: UniformTable::new(DEFAULT_UNIFORM_SLOTS),
            framebuffer: Framebuffer::new(width, height),
        }
    }

    /// Upload a buffer, returning the slot draw commands refer to it by.
    pub fn push_buffer(&mut self, buffer: Buffer) -> usize {
        self.buffers.push(buffer);
        self.buffers.len() - 1
    }

    /// Upload a texture, returning its sampling slot.
    pub fn push_texture(&mut self, texture: Texture) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    /// Register a program, returning the slot draw commands bind it by.
    pub fn push_program(&mut self, program: Program) -> usize {
        self.programs.push(program);
        self.programs.len() - 1
    }
}
