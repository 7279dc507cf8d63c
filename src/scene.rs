//! Turns a model description into GPU memory contents and a command buffer.
//!
//! A [`Model`] is a tree of transform nodes over a flat list of meshes. Each
//! mesh instance reached by the traversal becomes one DRAW command; its model
//! matrix, normal matrix and material are packed into the shared uniform
//! table at a slot range derived from the draw's ID, which the bundled
//! shaders read back through the draw-ID built-in.

use crate::attribute::{Attribute, AttributeType};
use crate::command::{ClearCommand, CommandBuffer, DrawCommand};
use crate::memory::Memory;
use crate::shader::{FragmentInput, Program, ShaderEnv, VertexInput, VertexOutput};
use crate::uniform::Uniform;
use crate::vertex::{AttributeBinding, IndexBinding, VertexArray};
use vek::*;

/// Uniform slot holding the view-projection matrix.
pub const VIEW_PROJECTION_UNIFORM: usize = 0;
/// Uniform slot holding the world-space light position.
pub const LIGHT_POSITION_UNIFORM: usize = 1;
/// First slot of the per-draw uniform ranges.
pub const DRAW_UNIFORMS_BASE: usize = 10;
/// Slots occupied per draw.
pub const DRAW_UNIFORMS_STRIDE: usize = 5;

const MODEL_MATRIX: usize = 0;
const NORMAL_MATRIX: usize = 1;
const DIFFUSE_COLOR: usize = 2;
const DIFFUSE_TEXTURE: usize = 3;

const AMBIENT: f32 = 0.2;

/// One drawable piece of geometry, described by bindings into buffers that
/// the caller has already uploaded to [`Memory`].
#[derive(Copy, Clone, Debug)]
pub struct Mesh {
    pub vertex_count: u32,
    pub index: Option<IndexBinding>,
    pub position: AttributeBinding,
    pub normal: AttributeBinding,
    pub tex_coord: AttributeBinding,
    pub diffuse_color: Rgba<f32>,
    pub diffuse_texture: Option<usize>,
    pub double_sided: bool,
}

/// A transform node, optionally instancing a mesh, with child nodes beneath
/// it. Transforms accumulate root-to-leaf.
#[derive(Clone, Debug)]
pub struct Node {
    pub transform: Mat4<f32>,
    pub mesh: Option<usize>,
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            transform: Mat4::identity(),
            mesh: None,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Model {
    pub meshes: Vec<Mesh>,
    pub roots: Vec<Node>,
}

/// Record the commands that render `model` and pack its uniforms.
///
/// Emits one CLEAR followed by one DRAW per mesh instance. The command buffer
/// must be fresh: per-draw uniform ranges are addressed by draw ID, which
/// counts DRAW commands from the start of the buffer.
///
/// The view-projection matrix and light position are scene state, not model
/// state; the caller sets them at [`VIEW_PROJECTION_UNIFORM`] and
/// [`LIGHT_POSITION_UNIFORM`].
///
/// Nodes are visited with an explicit worklist rather than recursion, so
/// arbitrarily deep scenes cannot exhaust the stack. Traversal is depth-first
/// in declaration order.
pub fn prepare_model(mem: &mut Memory, commands: &mut CommandBuffer, model: &Model) {
    let program = mem.push_program(model_program());

    commands.clear(ClearCommand::all(Rgba::new(0.1, 0.15, 0.1, 1.0), f32::INFINITY));

    let mut draw_index = 0u32;
    let mut worklist: Vec<(&Node, Mat4<f32>)> = Vec::new();
    for root in model.roots.iter().rev() {
        worklist.push((root, Mat4::identity()));
    }

    while let Some((node, parent)) = worklist.pop() {
        let transform = parent * node.transform;

        if let Some(mesh_index) = node.mesh {
            let mesh = &model.meshes[mesh_index];
            let base = DRAW_UNIFORMS_BASE + draw_index as usize * DRAW_UNIFORMS_STRIDE;
            mem.uniforms.set(base + MODEL_MATRIX, Uniform::Mat4(transform));
            mem.uniforms.set(
                base + NORMAL_MATRIX,
                Uniform::Mat4(transform.inverted().transposed()),
            );
            mem.uniforms
                .set(base + DIFFUSE_COLOR, Uniform::Vec4(Vec4::from(mesh.diffuse_color)));
            mem.uniforms.set(
                base + DIFFUSE_TEXTURE,
                Uniform::Int(mesh.diffuse_texture.map_or(-1, |slot| slot as i32)),
            );

            let mut vertex_array = VertexArray::default();
            vertex_array.index = mesh.index;
            vertex_array.attributes[0] = mesh.position;
            vertex_array.attributes[1] = mesh.normal;
            vertex_array.attributes[2] = mesh.tex_coord;

            commands.draw(DrawCommand {
                vertex_array,
                vertex_count: mesh.vertex_count,
                program,
                backface_culling: !mesh.double_sided,
            });
            draw_index += 1;
        }

        for child in node.children.iter().rev() {
            worklist.push((child, transform));
        }
    }
}

/// The program used by [`prepare_model`] draws: world-space Lambert shading
/// with an optional diffuse texture.
pub fn model_program() -> Program {
    Program::new(model_vertex_shader, model_fragment_shader)
        .with_varying(0, AttributeType::Vec3)
        .with_varying(1, AttributeType::Vec3)
        .with_varying(2, AttributeType::Vec2)
        .with_varying(3, AttributeType::Uint)
}

fn model_vertex_shader(input: &VertexInput, env: &ShaderEnv) -> VertexOutput {
    let base = DRAW_UNIFORMS_BASE + input.draw_id as usize * DRAW_UNIFORMS_STRIDE;
    let view_projection = env.uniforms.mat4(VIEW_PROJECTION_UNIFORM);
    let model = env.uniforms.mat4(base + MODEL_MATRIX);
    let normal_matrix = env.uniforms.mat4(base + NORMAL_MATRIX);

    let position = input.attributes[0].vec3();
    let normal = input.attributes[1].vec3();
    // Meshes without texture coordinates leave the slot empty.
    let uv = match input.attributes[2] {
        Attribute::Vec2(uv) => uv,
        _ => Vec2::zero(),
    };

    let world = model * Vec4::from_point(position);
    let mut out = VertexOutput::new(view_projection * world);
    out.attributes[0] = Attribute::Vec3(Vec3::from(world));
    out.attributes[1] = Attribute::Vec3(Vec3::from(normal_matrix * Vec4::from_direction(normal)));
    out.attributes[2] = Attribute::Vec2(uv);
    // The draw ID rides to the fragment stage as a flat attribute.
    out.attributes[3] = Attribute::Uint(input.draw_id);
    out
}

fn model_fragment_shader(input: &FragmentInput, env: &ShaderEnv) -> Rgba<f32> {
    let base = DRAW_UNIFORMS_BASE + input.attributes[3].uint() as usize * DRAW_UNIFORMS_STRIDE;

    let position = input.attributes[0].vec3();
    let normal = input.attributes[1].vec3().normalized();
    let uv = input.attributes[2].vec2();

    let texture = env.uniforms.int(base + DIFFUSE_TEXTURE);
    let albedo = if texture >= 0 {
        env.sample(texture as usize, uv)
    } else {
        Rgba::from(env.uniforms.vec4(base + DIFFUSE_COLOR))
    };

    let light = env.uniforms.vec3(LIGHT_POSITION_UNIFORM);
    let diffuse = (light - position).normalized().dot(normal).max(0.0);
    let shade = AMBIENT + (1.0 - AMBIENT) * diffuse;
    Rgba::new(albedo.r * shade, albedo.g * shade, albedo.b * shade, albedo.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn mesh(vertex_count: u32) -> Mesh {
        Mesh {
            vertex_count,
            index: None,
            position: AttributeBinding::UNUSED,
            normal: AttributeBinding::UNUSED,
            tex_coord: AttributeBinding::UNUSED,
            diffuse_color: Rgba::new(1.0, 0.0, 0.0, 1.0),
            diffuse_texture: None,
            double_sided: false,
        }
    }

    #[test]
    fn traversal_accumulates_transforms_in_declaration_order() {
        let model = Model {
            meshes: vec![mesh(3), mesh(6)],
            roots: vec![Node {
                transform: Mat4::translation_3d(Vec3::new(1.0, 0.0, 0.0)),
                mesh: Some(0),
                children: vec![Node {
                    transform: Mat4::translation_3d(Vec3::new(0.0, 2.0, 0.0)),
                    mesh: Some(1),
                    children: Vec::new(),
                }],
            }],
        };

        let mut mem = Memory::new(4, 4);
        let mut commands = CommandBuffer::new();
        prepare_model(&mut mem, &mut commands, &model);

        // One clear, then a draw per mesh instance, parent first.
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands.commands()[0], Command::Clear(_)));
        match commands.commands()[1] {
            Command::Draw(ref draw) => assert_eq!(draw.vertex_count, 3),
            _ => panic!("expected a draw"),
        }

        // The child's model matrix carries both translations.
        let child_model = mem
            .uniforms
            .mat4(DRAW_UNIFORMS_BASE + DRAW_UNIFORMS_STRIDE + MODEL_MATRIX);
        let moved = child_model * Vec4::from_point(Vec3::zero());
        assert_eq!(Vec3::from(moved), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn double_sided_meshes_disable_culling() {
        let mut two_sided = mesh(3);
        two_sided.double_sided = true;
        let model = Model {
            meshes: vec![two_sided],
            roots: vec![Node {
                mesh: Some(0),
                ..Node::default()
            }],
        };

        let mut mem = Memory::new(4, 4);
        let mut commands = CommandBuffer::new();
        prepare_model(&mut mem, &mut commands, &model);
        match commands.commands()[1] {
            Command::Draw(ref draw) => assert!(!draw.backface_culling),
            _ => panic!("expected a draw"),
        }
    }
}
