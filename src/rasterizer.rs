use crate::attribute::{Attribute, AttributeType, Interpolate, MAX_VERTEX_ATTRIBUTES};
use crate::framebuffer::FrameView;
use crate::primitive::Triangle;
use crate::shader::{FragmentInput, Program, ShaderEnv};
use vek::*;

/// Divide `x`, `y` and `z` of each clip position by `w`, mapping the triangle
/// into normalized device coordinates.
///
/// `w` itself is preserved: perspective-correct interpolation still needs it
/// at the fragment stage.
pub fn perspective_divide(tri: &mut Triangle) {
    for v in &mut tri.vertices {
        let w = v.position.w;
        v.position.x /= w;
        v.position.y /= w;
        v.position.z /= w;
    }
}

/// Map NDC `x, y` in `[-1, 1]` to pixel space `[0, width] x [0, height]`.
///
/// There is no y flip: framebuffer row 0 corresponds to NDC `y = -1`.
pub fn viewport_transform(tri: &mut Triangle, width: usize, height: usize) {
    for v in &mut tri.vertices {
        v.position.x = (v.position.x + 1.0) * width as f32 * 0.5;
        v.position.y = (v.position.y + 1.0) * height as f32 * 0.5;
    }
}

/// Twice the signed area of `(a, b, p)`: positive when `p` lies to the left
/// of the directed edge `a -> b`.
fn edge(a: Vec2<f32>, b: Vec2<f32>, p: Vec2<f32>) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Half-open coverage rule for a pixel center exactly on an edge: the pixel
/// belongs to the triangle whose (counter-clockwise-oriented) edge direction
/// points into the upper half-plane, with rightwards breaking the horizontal
/// tie. A shared edge is claimed by exactly one of the two triangles it
/// borders.
fn covers(e: f32, d: Vec2<f32>) -> bool {
    e > 0.0 || (e == 0.0 && (d.y > 0.0 || (d.y == 0.0 && d.x > 0.0)))
}

/// Rasterize one screen-space triangle into the rows of the given view.
///
/// Pixel `(x, y)` is tested at the sample point `(x + 0.5, y + 0.5)` and the
/// same point is reported to the fragment shader. Counter-clockwise winding
/// is front-facing; back faces are discarded when `backface_culling` is set,
/// zero-area triangles always.
pub fn draw_triangle(
    tri: &Triangle,
    program: &Program,
    env: &ShaderEnv,
    backface_culling: bool,
    view: &mut FrameView,
) {
    let [v0, v1, v2] = &tri.vertices;
    let a = Vec2::new(v0.position.x, v0.position.y);
    let b = Vec2::new(v1.position.x, v1.position.y);
    let c = Vec2::new(v2.position.x, v2.position.y);

    let area = edge(a, b, c);
    if area == 0.0 {
        return;
    }
    if backface_culling && area < 0.0 {
        return;
    }
    // Back faces rasterize with their orientation flipped so the same
    // positive-inside test applies.
    let flip = if area < 0.0 { -1.0 } else { 1.0 };
    let inv_area = 1.0 / (area * flip);

    let rows = view.rows();
    let x0 = a.x.min(b.x).min(c.x).max(0.0) as usize;
    let y0 = (a.y.min(b.y).min(c.y).max(0.0) as usize).max(rows.start);
    let x1 = (a.x.max(b.x).max(c.x).max(0.0).ceil() as usize).min(view.width());
    let y1 = (a.y.max(b.y).max(c.y).max(0.0).ceil() as usize).min(rows.end);

    let d0 = (c - b) * flip;
    let d1 = (a - c) * flip;
    let d2 = (b - a) * flip;
    let w = Vec3::new(v0.position.w, v1.position.w, v2.position.w);

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let e0 = edge(b, c, p) * flip;
            let e1 = edge(c, a, p) * flip;
            let e2 = edge(a, b, p) * flip;
            if !(covers(e0, d0) && covers(e1, d1) && covers(e2, d2)) {
                continue;
            }

            // Screen-space barycentric weights, then their
            // perspective-corrected counterparts.
            let l = Vec3::new(e0, e1, e2) * inv_area;
            let s = l.x / w.x + l.y / w.y + l.z / w.z;
            let l = Vec3::new(l.x / (w.x * s), l.y / (w.y * s), l.z / (w.z * s));

            let depth = f32::lerp3(v0.position.z, v1.position.z, v2.position.z, l.x, l.y, l.z);
            let mut fragment = FragmentInput::new(Vec3::new(p.x, p.y, depth));
            for slot in 0..MAX_VERTEX_ATTRIBUTES {
                if program.varyings[slot] != AttributeType::Empty {
                    fragment.attributes[slot] = Attribute::lerp3(
                        v0.attributes[slot],
                        v1.attributes[slot],
                        v2.attributes[slot],
                        l.x,
                        l.y,
                        l.z,
                    );
                }
            }

            let color = (program.fragment)(&fragment, env);
            view.merge(x, y, color, depth);
        }
    }
}
