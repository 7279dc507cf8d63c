use crate::attribute::{Attribute, AttributeType, MAX_VERTEX_ATTRIBUTES};
use crate::texture::Texture;
use crate::uniform::UniformTable;
use vek::*;

/// What a vertex shader receives: the built-in vertex and draw identifiers
/// plus the attributes fetched by vertex assembly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexInput {
    pub vertex_id: u32,
    pub draw_id: u32,
    pub attributes: [Attribute; MAX_VERTEX_ATTRIBUTES],
}

impl VertexInput {
    pub fn new(vertex_id: u32, draw_id: u32) -> Self {
        Self {
            vertex_id,
            draw_id,
            attributes: [Attribute::Empty; MAX_VERTEX_ATTRIBUTES],
        }
    }
}

/// What a vertex shader produces: a clip-space position and the attributes to
/// be interpolated across the triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexOutput {
    pub position: Vec4<f32>,
    pub attributes: [Attribute; MAX_VERTEX_ATTRIBUTES],
}

impl VertexOutput {
    pub fn new(position: Vec4<f32>) -> Self {
        Self {
            position,
            attributes: [Attribute::Empty; MAX_VERTEX_ATTRIBUTES],
        }
    }
}

impl Default for VertexOutput {
    fn default() -> Self {
        Self::new(Vec4::zero())
    }
}

/// What a fragment shader receives: the pixel-center screen coordinate with
/// interpolated depth in `z`, and the interpolated (or, for integer slots,
/// flat) attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FragmentInput {
    pub frag_coord: Vec3<f32>,
    pub attributes: [Attribute; MAX_VERTEX_ATTRIBUTES],
}

impl FragmentInput {
    pub fn new(frag_coord: Vec3<f32>) -> Self {
        Self {
            frag_coord,
            attributes: [Attribute::Empty; MAX_VERTEX_ATTRIBUTES],
        }
    }
}

/// The vertex stage callback. The engine never inspects its body; it only
/// relies on the returned clip-space position and on the attribute slots the
/// program declares.
pub type VertexShader = fn(&VertexInput, &ShaderEnv) -> VertexOutput;

/// The fragment stage callback, producing an RGBA color in `[0, 1]` (the
/// merge stage clamps).
pub type FragmentShader = fn(&FragmentInput, &ShaderEnv) -> Rgba<f32>;

/// A shader program: the two stage callbacks and the declared type of each
/// attribute slot flowing from the vertex to the fragment stage.
///
/// A shader reading a slot with a type other than the one declared here is a
/// precondition violation.
#[derive(Copy, Clone, Debug)]
pub struct Program {
    pub vertex: VertexShader,
    pub fragment: FragmentShader,
    pub varyings: [AttributeType; MAX_VERTEX_ATTRIBUTES],
}

impl Program {
    pub fn new(vertex: VertexShader, fragment: FragmentShader) -> Self {
        Self {
            vertex,
            fragment,
            varyings: [AttributeType::Empty; MAX_VERTEX_ATTRIBUTES],
        }
    }

    /// Declare the type carried by one vertex-to-fragment attribute slot.
    pub fn with_varying(mut self, slot: usize, ty: AttributeType) -> Self {
        self.varyings[slot] = ty;
        self
    }
}

/// The uniform and texture interface handed to every shader invocation.
#[derive(Copy, Clone)]
pub struct ShaderEnv<'a> {
    pub uniforms: &'a UniformTable,
    pub textures: &'a [Texture],
}

impl<'a> ShaderEnv<'a> {
    /// Sample the texture in the given slot at a normalized UV coordinate.
    ///
    /// An unbound slot samples as transparent black.
    pub fn sample(&self, slot: usize, uv: Vec2<f32>) -> Rgba<f32> {
        match self.textures.get(slot) {
            Some(texture) => texture.sample(uv),
            None => Rgba::zero(),
        }
    }
}
