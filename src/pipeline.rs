use crate::buffer::Buffer;
use crate::clip;
use crate::command::{Command, CommandBuffer, DrawCommand};
use crate::framebuffer::Framebuffer;
use crate::memory::Memory;
use crate::primitive::Triangle;
use crate::rasterizer;
use crate::shader::{Program, ShaderEnv, VertexOutput};
use crate::vertex::VertexArray;

/// Execute a command buffer against the given memory.
///
/// Commands run strictly in recording order, each completing before the next
/// begins. Every DRAW command is assigned a zero-based draw ID, counting DRAW
/// commands only, which shaders observe as a built-in.
pub fn execute(mem: &mut Memory, commands: &CommandBuffer) {
    let mut draw_id = 0;
    for command in commands.commands() {
        match *command {
            Command::Clear(clear) => {
                if let Some(color) = clear.color {
                    mem.framebuffer.clear_color(color);
                }
                if let Some(depth) = clear.depth {
                    mem.framebuffer.clear_depth(depth);
                }
            }
            Command::Draw(ref cmd) => {
                let Memory {
                    ref buffers,
                    ref textures,
                    ref programs,
                    ref uniforms,
                    ref mut framebuffer,
                } = *mem;
                let env = ShaderEnv { uniforms, textures };
                draw(buffers, &programs[cmd.program], &env, framebuffer, cmd, draw_id);
                draw_id += 1;
            }
        }
    }
}

/// Run the per-triangle pipeline for one draw command.
fn draw(
    buffers: &[Buffer],
    program: &Program,
    env: &ShaderEnv,
    framebuffer: &mut Framebuffer,
    cmd: &DrawCommand,
    draw_id: u32,
) {
    let (width, height) = (framebuffer.width(), framebuffer.height());
    if width == 0 || height == 0 {
        return;
    }

    // Shade, clip and project every triangle up front; rasterization then
    // only needs shared access to the finished list.
    let mut triangles = Vec::with_capacity(cmd.vertex_count as usize / 3);
    for index in 0..cmd.vertex_count / 3 {
        let tri = assemble(buffers, program, env, &cmd.vertex_array, index, draw_id);
        for clipped in clip::clip_near(&tri).as_slice() {
            let mut tri = *clipped;
            rasterizer::perspective_divide(&mut tri);
            rasterizer::viewport_transform(&mut tri, width, height);
            triangles.push(tri);
        }
    }
    if triangles.is_empty() {
        return;
    }

    render(framebuffer, &triangles, program, env, cmd.backface_culling);
}

/// Vertex-assemble and shade invocations `3t`, `3t + 1` and `3t + 2` into a
/// triangle, corners in invocation order.
fn assemble(
    buffers: &[Buffer],
    program: &Program,
    env: &ShaderEnv,
    vertex_array: &VertexArray,
    triangle_index: u32,
    draw_id: u32,
) -> Triangle {
    let mut vertices = [VertexOutput::default(); 3];
    for (corner, vertex) in vertices.iter_mut().enumerate() {
        let input = vertex_array.fetch(buffers, triangle_index * 3 + corner as u32, draw_id);
        *vertex = (program.vertex)(&input, env);
    }
    Triangle::new(vertices)
}

#[cfg(not(feature = "par"))]
fn render(
    framebuffer: &mut Framebuffer,
    triangles: &[Triangle],
    program: &Program,
    env: &ShaderEnv,
    backface_culling: bool,
) {
    let mut view = framebuffer.view_mut();
    for tri in triangles {
        rasterizer::draw_triangle(tri, program, env, backface_culling, &mut view);
    }
}

/// Rasterize across disjoint horizontal bands of the framebuffer, one thread
/// per band.
///
/// Each band walks the draw's triangles in submission order, so every pixel
/// sees the exact merge sequence of sequential execution and the result is
/// bit-identical to it.
#[cfg(feature = "par")]
fn render(
    framebuffer: &mut Framebuffer,
    triangles: &[Triangle],
    program: &Program,
    env: &ShaderEnv,
    backface_culling: bool,
) {
    // Keep bands coarse enough that a small draw does not pay for spawning.
    const FRAGMENTS_PER_BAND: usize = 20_000;
    let min_rows = (FRAGMENTS_PER_BAND / framebuffer.width().max(1)).max(1);
    let threads = num_cpus::get()
        .min(framebuffer.height() / min_rows)
        .max(1);

    if threads == 1 {
        let mut view = framebuffer.view_mut();
        for tri in triangles {
            rasterizer::draw_triangle(tri, program, env, backface_culling, &mut view);
        }
        return;
    }

    let band_rows = (framebuffer.height() + threads - 1) / threads;
    std::thread::scope(|s| {
        for mut band in framebuffer.bands_mut(band_rows) {
            s.spawn(move || {
                for tri in triangles {
                    rasterizer::draw_triangle(tri, program, env, backface_culling, &mut band);
                }
            });
        }
    });
}
