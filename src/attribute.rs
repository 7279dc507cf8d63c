use vek::*;

/// The number of generic attribute slots carried by every vertex and fragment.
pub const MAX_VERTEX_ATTRIBUTES: usize = 8;

/// The declared type of an attribute slot.
///
/// A slot declared [`AttributeType::Empty`] is unused: vertex assembly skips it
/// and the rasterizer never interpolates it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Empty,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Uint,
    Uvec2,
    Uvec3,
    Uvec4,
}

impl AttributeType {
    /// Size of one element of this type in a vertex buffer, in bytes.
    pub fn size(&self) -> usize {
        match self {
            AttributeType::Empty => 0,
            AttributeType::Float | AttributeType::Uint => 4,
            AttributeType::Vec2 | AttributeType::Uvec2 => 8,
            AttributeType::Vec3 | AttributeType::Uvec3 => 12,
            AttributeType::Vec4 | AttributeType::Uvec4 => 16,
        }
    }

    /// Integer-typed slots are flat-shaded: they propagate from a triangle's
    /// first vertex rather than being interpolated.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            AttributeType::Uint | AttributeType::Uvec2 | AttributeType::Uvec3 | AttributeType::Uvec4
        )
    }
}

impl Default for AttributeType {
    fn default() -> Self {
        AttributeType::Empty
    }
}

/// A single attribute value, tagged by its runtime type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Attribute {
    Empty,
    Float(f32),
    Vec2(Vec2<f32>),
    Vec3(Vec3<f32>),
    Vec4(Vec4<f32>),
    Uint(u32),
    Uvec2(Vec2<u32>),
    Uvec3(Vec3<u32>),
    Uvec4(Vec4<u32>),
}

impl Attribute {
    pub fn ty(&self) -> AttributeType {
        match self {
            Attribute::Empty => AttributeType::Empty,
            Attribute::Float(_) => AttributeType::Float,
            Attribute::Vec2(_) => AttributeType::Vec2,
            Attribute::Vec3(_) => AttributeType::Vec3,
            Attribute::Vec4(_) => AttributeType::Vec4,
            Attribute::Uint(_) => AttributeType::Uint,
            Attribute::Uvec2(_) => AttributeType::Uvec2,
            Attribute::Uvec3(_) => AttributeType::Uvec3,
            Attribute::Uvec4(_) => AttributeType::Uvec4,
        }
    }

    /// Read this slot as a `f32`.
    ///
    /// Shaders may only read a slot with the type the bound program declared
    /// for it; reading any other variant is a precondition violation and
    /// panics.
    pub fn float(&self) -> f32 {
        match self {
            Attribute::Float(v) => *v,
            other => panic!("attribute read as Float but holds {:?}", other.ty()),
        }
    }

    pub fn vec2(&self) -> Vec2<f32> {
        match self {
            Attribute::Vec2(v) => *v,
            other => panic!("attribute read as Vec2 but holds {:?}", other.ty()),
        }
    }

    pub fn vec3(&self) -> Vec3<f32> {
        match self {
            Attribute::Vec3(v) => *v,
            other => panic!("attribute read as Vec3 but holds {:?}", other.ty()),
        }
    }

    pub fn vec4(&self) -> Vec4<f32> {
        match self {
            Attribute::Vec4(v) => *v,
            other => panic!("attribute read as Vec4 but holds {:?}", other.ty()),
        }
    }

    pub fn uint(&self) -> u32 {
        match self {
            Attribute::Uint(v) => *v,
            other => panic!("attribute read as Uint but holds {:?}", other.ty()),
        }
    }

    pub fn uvec2(&self) -> Vec2<u32> {
        match self {
            Attribute::Uvec2(v) => *v,
            other => panic!("attribute read as Uvec2 but holds {:?}", other.ty()),
        }
    }

    pub fn uvec3(&self) -> Vec3<u32> {
        match self {
            Attribute::Uvec3(v) => *v,
            other => panic!("attribute read as Uvec3 but holds {:?}", other.ty()),
        }
    }

    pub fn uvec4(&self) -> Vec4<u32> {
        match self {
            Attribute::Uvec4(v) => *v,
            other => panic!("attribute read as Uvec4 but holds {:?}", other.ty()),
        }
    }

    /// Blend two attribute values along an edge, `t` running from `a` to `b`.
    ///
    /// Used when clipping cuts an edge: float-typed values blend linearly in
    /// clip space, integer-typed (flat) values keep `a`'s value.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let (x, y) = (1.0 - t, t);
        match (a, b) {
            (Attribute::Float(a), Attribute::Float(b)) => Attribute::Float(f32::lerp2(a, b, x, y)),
            (Attribute::Vec2(a), Attribute::Vec2(b)) => Attribute::Vec2(Vec2::lerp2(a, b, x, y)),
            (Attribute::Vec3(a), Attribute::Vec3(b)) => Attribute::Vec3(Vec3::lerp2(a, b, x, y)),
            (Attribute::Vec4(a), Attribute::Vec4(b)) => Attribute::Vec4(Vec4::lerp2(a, b, x, y)),
            _ => a,
        }
    }

    /// Blend three attribute values with barycentric weights.
    ///
    /// Float-typed values are weighted and summed; integer-typed (flat) values
    /// propagate from `a`, the triangle's first vertex.
    pub fn lerp3(a: Self, b: Self, c: Self, x: f32, y: f32, z: f32) -> Self {
        match (a, b, c) {
            (Attribute::Float(a), Attribute::Float(b), Attribute::Float(c)) => {
                Attribute::Float(f32::lerp3(a, b, c, x, y, z))
            }
            (Attribute::Vec2(a), Attribute::Vec2(b), Attribute::Vec2(c)) => {
                Attribute::Vec2(Vec2::lerp3(a, b, c, x, y, z))
            }
            (Attribute::Vec3(a), Attribute::Vec3(b), Attribute::Vec3(c)) => {
                Attribute::Vec3(Vec3::lerp3(a, b, c, x, y, z))
            }
            (Attribute::Vec4(a), Attribute::Vec4(b), Attribute::Vec4(c)) => {
                Attribute::Vec4(Vec4::lerp3(a, b, c, x, y, z))
            }
            _ => a,
        }
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::Empty
    }
}

/// A trait used to enable types to be interpolated throughout the rasterization process
pub trait Interpolate {
    /// Linearly scale two items of this type and sum them
    fn lerp2(a: Self, b: Self, x: f32, y: f32) -> Self;

    /// Linearly scale three items of this type and sum them
    fn lerp3(a: Self, b: Self, c: Self, x: f32, y: f32, z: f32) -> Self;
}

macro_rules! impl_interpolate_for {
    ($t:ty) => {
        impl Interpolate for $t {
            #[inline(always)]
            fn lerp2(a: Self, b: Self, x: f32, y: f32) -> Self {
                a * x + b * y
            }
            #[inline(always)]
            fn lerp3(a: Self, b: Self, c: Self, x: f32, y: f32, z: f32) -> Self {
                a * x + b * y + c * z
            }
        }
    };
}
impl_interpolate_for!(f32);
impl_interpolate_for!(Vec2<f32>);
impl_interpolate_for!(Vec3<f32>);
impl_interpolate_for!(Vec4<f32>);
impl_interpolate_for!(Rgba<f32>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_attributes_blend_linearly() {
        let a = Attribute::Float(0.0);
        let b = Attribute::Float(2.0);
        assert_eq!(Attribute::lerp(a, b, 0.25), Attribute::Float(0.5));

        let a = Attribute::Vec2(Vec2::new(0.0, 1.0));
        let b = Attribute::Vec2(Vec2::new(1.0, 0.0));
        assert_eq!(
            Attribute::lerp(a, b, 0.5),
            Attribute::Vec2(Vec2::new(0.5, 0.5)),
        );
    }

    #[test]
    fn integer_attributes_are_flat() {
        let a = Attribute::Uint(7);
        let b = Attribute::Uint(99);
        assert_eq!(Attribute::lerp(a, b, 0.9), a);
        assert_eq!(Attribute::lerp3(a, b, Attribute::Uint(3), 0.1, 0.2, 0.7), a);
    }

    #[test]
    fn barycentric_blend_is_a_weighted_sum() {
        let a = Attribute::Vec3(Vec3::new(1.0, 0.0, 0.0));
        let b = Attribute::Vec3(Vec3::new(0.0, 1.0, 0.0));
        let c = Attribute::Vec3(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(
            Attribute::lerp3(a, b, c, 0.5, 0.25, 0.25),
            Attribute::Vec3(Vec3::new(0.5, 0.25, 0.25)),
        );
    }

    #[test]
    fn element_sizes() {
        assert_eq!(AttributeType::Float.size(), 4);
        assert_eq!(AttributeType::Vec3.size(), 12);
        assert_eq!(AttributeType::Uvec4.size(), 16);
        assert_eq!(AttributeType::Empty.size(), 0);
    }
}
