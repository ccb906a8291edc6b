use std::fmt;

/// An 8-bit RGB color as handed to a [`crate::canvas::Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    /// Fill of the reserved band under the ground line.
    pub const SOIL: Rgb = Rgb(59, 41, 28);
}

/// Hue / saturation / brightness color, the way blade colors are picked.
///
/// `hue` is in degrees, `saturation` and `brightness` in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Converts to RGB using the usual HSV sector formula.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |f: f32| ((f + m) * 255.0).round() as u8;
        Rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsb({}, {}%, {}%)",
            self.hue, self.saturation, self.brightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_css_like_hsb_string() {
        let c = Hsb::new(120.0, 40.0, 35.0);
        assert_eq!(c.to_string(), "hsb(120, 40%, 35%)");
    }

    #[test]
    fn green_hue_converts_to_green_dominant_rgb() {
        // v = 0.5, s = 0.4 -> g ~ 127.5, r = b ~ 0.5 * 0.6 * 255 = 76.5
        let Rgb(r, g, b) = Hsb::new(120.0, 40.0, 50.0).to_rgb();
        assert!((127..=128).contains(&g), "g = {g}");
        assert_eq!(r, b);
        assert!((76..=77).contains(&r), "r = {r}");
    }

    #[test]
    fn primary_and_grey_conversions() {
        assert_eq!(Hsb::new(0.0, 100.0, 100.0).to_rgb(), Rgb::RED);
        assert_eq!(Hsb::new(0.0, 0.0, 100.0).to_rgb(), Rgb::WHITE);
        assert_eq!(Hsb::new(240.0, 100.0, 0.0).to_rgb(), Rgb::BLACK);
        assert_eq!(Hsb::new(360.0, 100.0, 100.0).to_rgb(), Rgb::RED);
    }
}
