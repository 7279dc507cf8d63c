use crate::attribute::{Attribute, AttributeType};
use crate::vertex::IndexType;
use vek::*;

/// An opaque blob of bytes holding vertex or index data.
///
/// Buffers are uploaded once and read-only for the duration of a draw. All
/// reinterpretation of their contents happens through the typed readers below;
/// offsets and strides are caller-supplied and unvalidated, so an
/// out-of-bounds read is a precondition violation (it panics rather than
/// yielding garbage, but the rendered output of such a command buffer is
/// unspecified either way).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Upload a slice of floats as raw bytes in the host's layout.
    pub fn from_floats(values: &[f32]) -> Self {
        Self {
            data: bytemuck::cast_slice(values).to_vec(),
        }
    }

    /// Upload a slice of 32-bit unsigned integers as raw bytes.
    pub fn from_u32s(values: &[u32]) -> Self {
        Self {
            data: bytemuck::cast_slice(values).to_vec(),
        }
    }

    /// Upload a slice of 16-bit unsigned integers as raw bytes.
    pub fn from_u16s(values: &[u16]) -> Self {
        Self {
            data: bytemuck::cast_slice(values).to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reinterpret the bytes at `offset` as a value of the given type.
    pub fn read_attribute(&self, ty: AttributeType, offset: usize) -> Attribute {
        match ty {
            AttributeType::Empty => Attribute::Empty,
            AttributeType::Float => Attribute::Float(self.read_f32(offset)),
            AttributeType::Vec2 => Attribute::Vec2(Vec2::new(
                self.read_f32(offset),
                self.read_f32(offset + 4),
            )),
            AttributeType::Vec3 => Attribute::Vec3(Vec3::new(
                self.read_f32(offset),
                self.read_f32(offset + 4),
                self.read_f32(offset + 8),
            )),
            AttributeType::Vec4 => Attribute::Vec4(Vec4::new(
                self.read_f32(offset),
                self.read_f32(offset + 4),
                self.read_f32(offset + 8),
                self.read_f32(offset + 12),
            )),
            AttributeType::Uint => Attribute::Uint(self.read_u32(offset)),
            AttributeType::Uvec2 => Attribute::Uvec2(Vec2::new(
                self.read_u32(offset),
                self.read_u32(offset + 4),
            )),
            AttributeType::Uvec3 => Attribute::Uvec3(Vec3::new(
                self.read_u32(offset),
                self.read_u32(offset + 4),
                self.read_u32(offset + 8),
            )),
            AttributeType::Uvec4 => Attribute::Uvec4(Vec4::new(
                self.read_u32(offset),
                self.read_u32(offset + 4),
                self.read_u32(offset + 8),
                self.read_u32(offset + 12),
            )),
        }
    }

    /// Decode the `i`th index element of a run starting at `offset`.
    pub fn read_index(&self, ty: IndexType, offset: usize, i: u32) -> u32 {
        let at = offset + ty.size() * i as usize;
        match ty {
            IndexType::U8 => self.data[at] as u32,
            IndexType::U16 => bytemuck::pod_read_unaligned::<u16>(&self.data[at..at + 2]) as u32,
            IndexType::U32 => bytemuck::pod_read_unaligned::<u32>(&self.data[at..at + 4]),
        }
    }

    fn read_f32(&self, offset: usize) -> f32 {
        bytemuck::pod_read_unaligned(&self.data[offset..offset + 4])
    }

    fn read_u32(&self, offset: usize) -> u32 {
        bytemuck::pod_read_unaligned(&self.data[offset..offset + 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads_honour_offsets() {
        let buffer = Buffer::from_floats(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(buffer.len(), 20);
        assert_eq!(
            buffer.read_attribute(AttributeType::Float, 4),
            Attribute::Float(2.0),
        );
        assert_eq!(
            buffer.read_attribute(AttributeType::Vec3, 8),
            Attribute::Vec3(Vec3::new(3.0, 4.0, 5.0)),
        );
    }

    #[test]
    fn unaligned_reads_are_allowed() {
        // A packed layout may place a float at any byte offset.
        let mut data = vec![0u8];
        data.extend_from_slice(&1.5f32.to_ne_bytes());
        let buffer = Buffer::new(data);
        assert_eq!(
            buffer.read_attribute(AttributeType::Float, 1),
            Attribute::Float(1.5),
        );
    }

    #[test]
    fn index_decoding_per_element_width() {
        let buffer = Buffer::new(vec![5, 6, 7]);
        assert_eq!(buffer.read_index(IndexType::U8, 0, 2), 7);

        let buffer = Buffer::from_u16s(&[300, 400]);
        assert_eq!(buffer.read_index(IndexType::U16, 0, 1), 400);

        let buffer = Buffer::from_u32s(&[9, 70_000]);
        assert_eq!(buffer.read_index(IndexType::U32, 0, 1), 70_000);
        assert_eq!(buffer.read_index(IndexType::U32, 4, 0), 70_000);
    }
}
