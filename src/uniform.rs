use vek::*;

/// A single uniform value, tagged by its runtime type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Uniform {
    Float(f32),
    Vec2(Vec2<f32>),
    Vec3(Vec3<f32>),
    Vec4(Vec4<f32>),
    Int(i32),
    Uint(u32),
    Mat4(Mat4<f32>),
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform::Float(0.0)
    }
}

/// A fixed-size table of uniform values shared by every draw in a command
/// buffer.
///
/// Slot indices are caller-managed: callers pack per-draw parameters at
/// offsets of their choosing and the bound shaders read them back from the
/// same offsets. The table performs no bounds or type validation beyond the
/// typed accessors below; indexing a missing slot or reading a slot with the
/// wrong accessor is a precondition violation and panics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniformTable {
    values: Vec<Uniform>,
}

impl UniformTable {
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![Uniform::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, index: usize, value: Uniform) {
        self.values[index] = value;
    }

    pub fn get(&self, index: usize) -> Uniform {
        self.values[index]
    }

    pub fn float(&self, index: usize) -> f32 {
        match self.values[index] {
            Uniform::Float(v) => v,
            other => panic!("uniform {} read as Float but holds {:?}", index, other),
        }
    }

    pub fn vec2(&self, index: usize) -> Vec2<f32> {
        match self.values[index] {
            Uniform::Vec2(v) => v,
            other => panic!("uniform {} read as Vec2 but holds {:?}", index, other),
        }
    }

    pub fn vec3(&self, index: usize) -> Vec3<f32> {
        match self.values[index] {
            Uniform::Vec3(v) => v,
            other => panic!("uniform {} read as Vec3 but holds {:?}", index, other),
        }
    }

    pub fn vec4(&self, index: usize) -> Vec4<f32> {
        match self.values[index] {
            Uniform::Vec4(v) => v,
            other => panic!("uniform {} read as Vec4 but holds {:?}", index, other),
        }
    }

    pub fn int(&self, index: usize) -> i32 {
        match self.values[index] {
            Uniform::Int(v) => v,
            other => panic!("uniform {} read as Int but holds {:?}", index, other),
        }
    }

    pub fn uint(&self, index: usize) -> u32 {
        match self.values[index] {
            Uniform::Uint(v) => v,
            other => panic!("uniform {} read as Uint but holds {:?}", index, other),
        }
    }

    pub fn mat4(&self, index: usize) -> Mat4<f32> {
        match self.values[index] {
            Uniform::Mat4(v) => v,
            other => panic!("uniform {} read as Mat4 but holds {:?}", index, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_round_trips() {
        let mut table = UniformTable::new(4);
        table.set(0, Uniform::Mat4(Mat4::identity()));
        table.set(1, Uniform::Vec4(Vec4::new(1.0, 2.0, 3.0, 4.0)));
        table.set(3, Uniform::Int(-1));

        assert_eq!(table.mat4(0), Mat4::identity());
        assert_eq!(table.vec4(1), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(table.int(3), -1);
        // Untouched slots read back as zero floats.
        assert_eq!(table.float(2), 0.0);
    }

    #[test]
    #[should_panic]
    fn mismatched_accessor_panics() {
        let table = UniformTable::new(1);
        table.mat4(0);
    }
}
