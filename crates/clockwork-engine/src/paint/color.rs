/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Matches the premultiplied blend state every shape renderer uses.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);
    /// `#CCCCCC`, opaque. Stored linear (0.6038) so an sRGB surface shows `0xCC`.
    pub const LIGHT_GRAY: Color = Color::from_premul(0.6038, 0.6038, 0.6038, 1.0);

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    ///
    /// RGB is decoded to linear light; alpha is already linear. Preferred
    /// constructor for colors written as hex literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Components as a `[r, g, b, a]` array, the layout GPU instance buffers expect.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// sRGB transfer function, byte to linear `0.0..=1.0`.
fn srgb_to_linear(v: u8) -> f32 {
    let c = v as f32 / 255.0;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_bytes_are_premultiplied() {
        let c = Color::from_srgb_u8(255, 0, 0, 51);
        assert!((c.a - 0.2).abs() < 1e-6);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn srgb_bytes_decode_to_linear() {
        // Mid-gray 0x80 is about 0.216 in linear light.
        let c = Color::from_srgb_u8(0x80, 0x80, 0x80, 0xFF);
        assert!((c.r - 0.2158).abs() < 1e-3);
        assert!((Color::from_srgb_u8(0xFF, 0xFF, 0xFF, 0xFF).r - 1.0).abs() < 1e-6);
        assert_eq!(Color::from_srgb_u8(0, 0, 0, 0xFF), Color::BLACK);
    }

    #[test]
    fn light_gray_matches_cc_bytes() {
        let cc = Color::from_srgb_u8(0xCC, 0xCC, 0xCC, 0xFF);
        assert!((cc.r - Color::LIGHT_GRAY.r).abs() < 1e-3);
        assert!((cc.g - Color::LIGHT_GRAY.g).abs() < 1e-3);
        assert!((cc.b - Color::LIGHT_GRAY.b).abs() < 1e-3);
        assert_eq!(cc.a, Color::LIGHT_GRAY.a);
    }

    #[test]
    fn straight_alpha_scales_rgb() {
        let c = Color::from_straight(0.5, 0.25, 1.0, 0.5);
        assert_eq!(c.to_array(), [0.25, 0.125, 0.5, 0.5]);
    }
}
