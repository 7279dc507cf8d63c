use vek::*;

/// A 2-dimensional image sampled by shaders.
///
/// Texel data is tightly packed, row-major, top-to-bottom, one unsigned byte
/// per channel. Textures carry 1 to 4 channels; missing channels sample as
/// `(0, 0, 0, 1)` defaults so a single-channel texture reads as a red ramp
/// with opaque alpha.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Texture {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Texture {
    /// Wrap raw texel data.
    ///
    /// # Panics
    ///
    /// Panics if the data length does not equal `width * height * channels`
    /// or if `channels` is outside `1..=4`.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        assert!(
            (1..=4).contains(&channels),
            "textures carry 1 to 4 channels, got {}",
            channels
        );
        assert_eq!(
            data.len(),
            width * height * channels,
            "texel data length does not match {}x{}x{}",
            width,
            height,
            channels
        );
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// A texture with no storage. Sampling it yields transparent black.
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Nearest-neighbour sample at a normalized UV coordinate.
    ///
    /// Coordinates wrap by their fractional part (repeat addressing), so
    /// `u = 1.25` samples the same texel column as `u = 0.25`. An empty
    /// texture samples as transparent black.
    pub fn sample(&self, uv: Vec2<f32>) -> Rgba<f32> {
        if self.data.is_empty() {
            return Rgba::zero();
        }
        let x = Self::denormalize(uv.x, self.width);
        let y = Self::denormalize(uv.y, self.height);
        let base = (y * self.width + x) * self.channels;

        let mut channel = [0.0, 0.0, 0.0, 1.0];
        for (c, value) in channel.iter_mut().enumerate().take(self.channels) {
            *value = self.data[base + c] as f32 / 255.0;
        }
        Rgba::new(channel[0], channel[1], channel[2], channel[3])
    }

    fn denormalize(v: f32, size: usize) -> usize {
        let wrapped = v - v.floor();
        ((wrapped * size as f32) as usize).min(size - 1)
    }
}

#[cfg(feature = "image")]
mod image_interop {
    use super::Texture;
    use image_ as image;

    impl From<image::RgbaImage> for Texture {
        fn from(img: image::RgbaImage) -> Self {
            let (width, height) = img.dimensions();
            Texture::from_raw(width as usize, height as usize, 4, img.into_raw())
        }
    }

    impl From<image::GrayImage> for Texture {
        fn from(img: image::GrayImage) -> Self {
            let (width, height) = img.dimensions();
            Texture::from_raw(width as usize, height as usize, 1, img.into_raw())
        }
    }
}
