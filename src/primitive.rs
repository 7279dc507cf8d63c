use crate::shader::VertexOutput;

/// Three shaded vertices in invocation order.
///
/// The order defines the triangle's winding: counter-clockwise in screen
/// space is front-facing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [VertexOutput; 3],
}

impl Triangle {
    pub fn new(vertices: [VertexOutput; 3]) -> Self {
        Self { vertices }
    }
}
