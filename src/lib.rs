//! A software rendering pipeline driven by command buffers.
//!
//! `raxel` executes an in-memory scene description (vertex and index buffers,
//! uniform values, textures and a pair of shader callbacks per program)
//! against a color-plus-depth framebuffer, with no hardware graphics API
//! underneath. Every stage a GPU would run in silicon is ordinary code here:
//!
//! - Command interpretation ([`pipeline::execute`]): CLEAR and DRAW commands
//!   run strictly in recording order, each DRAW receiving a sequential draw ID.
//! - Vertex assembly ([`vertex`]): index resolution and typed attribute
//!   fetches out of raw byte buffers.
//! - Shader invocation ([`shader`]): caller-supplied vertex and fragment
//!   callbacks with a fixed record contract; the engine never looks inside.
//! - Near-plane clipping ([`clip`]): a straddling triangle is cut into one or
//!   two triangles, attributes blending linearly in clip space.
//! - Projection and viewport mapping, then edge-function rasterization with
//!   winding-based backface culling ([`rasterizer`]).
//! - Perspective-correct attribute interpolation, depth test and alpha blend
//!   into the framebuffer ([`framebuffer`]).
//!
//! Inputs are trusted: buffer offsets, uniform indices and attribute types
//! are caller-managed, and violating their documented preconditions yields
//! unspecified images (or an ordinary out-of-bounds panic), never a silent
//! error channel.

pub mod attribute;
pub mod buffer;
pub mod clip;
pub mod command;
pub mod framebuffer;
pub mod memory;
pub mod pipeline;
pub mod primitive;
pub mod rasterizer;
pub mod scene;
pub mod shader;
pub mod texture;
pub mod uniform;
pub mod vertex;

// Reexports
pub use self::attribute::{Attribute, AttributeType, Interpolate, MAX_VERTEX_ATTRIBUTES};
pub use self::buffer::Buffer;
pub use self::command::{ClearCommand, Command, CommandBuffer, DrawCommand};
pub use self::framebuffer::{FrameView, Framebuffer};
pub use self::memory::Memory;
pub use self::pipeline::execute;
pub use self::primitive::Triangle;
pub use self::shader::{
    FragmentInput, FragmentShader, Program, ShaderEnv, VertexInput, VertexOutput, VertexShader,
};
pub use self::texture::Texture;
pub use self::uniform::{Uniform, UniformTable};
pub use self::vertex::{AttributeBinding, IndexBinding, IndexType, VertexArray};
