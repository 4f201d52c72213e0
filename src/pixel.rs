//! RGB pixel value type and the channel clamp policy.
//!
//! Luminance uses the ITU-R BT.601 weights (0.299, 0.587, 0.114) with the
//! result truncated toward zero, which is what the thermal and grayscale
//! filters map on.

/// ITU-R BT.601 luminance coefficients
pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

/// One RGB pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::from_rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::from_rgb(255, 255, 255);

    /// Build a pixel from in-range channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// Build a pixel from arbitrary intensities, clamping each to 0-255.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Pixel {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Perceptual brightness, truncated to an integer in 0-255.
    #[inline]
    pub fn luminance(&self) -> i32 {
        (LUMA_R * self.red as f64 + LUMA_G * self.green as f64 + LUMA_B * self.blue as f64)
            as i32
    }

    /// Channels as `[red, green, blue]`.
    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Map every channel through `f`, clamping the result.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(i32) -> i32) -> Self {
        Pixel::new(
            f(self.red as i32),
            f(self.green as i32),
            f(self.blue as i32),
        )
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Pixel { red, green, blue }
    }
}

/// Clamp an arbitrary intensity into the 0-255 channel range.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
