//! Color space conversions for the OKLab family.
//!
//! The matrices are the CSS Color 4 ones (linear sRGB → XYZ D65 → LMS → OKLab), so results agree
//! with browsers and with the common JavaScript color libraries to five decimal places.

/// Below this on both opponent axes a color has no meaningful hue
pub const ACHROMATIC_EPSILON: f64 = 0.0002;

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_390_799_265_959_34, 0.357_584_339_383_878, 0.180_480_788_401_834_3],
    [0.212_639_005_871_510_27, 0.715_168_678_767_756, 0.072_192_315_360_733_71],
    [0.019_330_818_715_591_82, 0.119_194_779_794_625_98, 0.950_532_152_249_660_7],
];

#[rustfmt::skip]
const XYZ_TO_LMS: [[f64; 3]; 3] = [
    [0.819_022_437_996_703, 0.361_906_260_052_890_4, -0.128_873_781_520_987_9],
    [0.032_983_653_932_388_5, 0.929_286_861_586_343_4, 0.036_144_666_350_642_4],
    [0.048_177_189_359_624_2, 0.264_239_531_752_730_8, 0.633_547_828_469_430_9],
];

#[rustfmt::skip]
const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.210_454_268_309_314, 0.793_617_774_702_305_4, -0.004_072_043_011_619_3],
    [1.977_998_532_431_168_4, -2.428_592_242_048_579_9, 0.450_593_709_617_411],
    [0.025_904_042_465_547_8, 0.782_771_712_457_529_6, -0.808_675_754_923_077_4],
];

fn multiply(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

/// Gamma-encoded sRGB, channels nominally in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Srgb {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build from 8-bit channels
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            1.0,
        )
    }

    /// Convert HSL (hue in degrees, saturation and lightness in `0.0..=1.0`)
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let mut hue = hue % 360.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        let channel = |n: f64| {
            let k = (n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };
        Self::new(channel(0.0), channel(8.0), channel(4.0), alpha)
    }

    /// Remove the sRGB transfer curve
    pub fn to_linear(self) -> [f64; 3] {
        let decode = |c: f64| {
            let abs = c.abs();
            if abs <= 0.040_45 {
                c / 12.92
            } else {
                c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        };
        [decode(self.red), decode(self.green), decode(self.blue)]
    }

    pub fn to_oklab(self) -> Oklab {
        let xyz = multiply(&LINEAR_SRGB_TO_XYZ, self.to_linear());
        let lms = multiply(&XYZ_TO_LMS, xyz).map(f64::cbrt);
        let [l, a, b] = multiply(&LMS_TO_OKLAB, lms);
        Oklab {
            lightness: l,
            a,
            b,
            alpha: self.alpha,
        }
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_oklab().to_oklch()
    }
}

/// OKLab with lightness in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Oklab {
    /// Polar form. Hue is `NaN` when the color is achromatic.
    pub fn to_oklch(self) -> Oklch {
        let hue = if self.a.abs() < ACHROMATIC_EPSILON && self.b.abs() < ACHROMATIC_EPSILON {
            f64::NAN
        } else {
            self.b.atan2(self.a).to_degrees().rem_euclid(360.0)
        };
        Oklch {
            lightness: self.lightness,
            chroma: self.a.hypot(self.b),
            hue,
            alpha: self.alpha,
        }
    }
}

/// OKLCH with lightness in `0.0..=1.0` and hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl Oklch {
    pub const fn new(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            alpha,
        }
    }

    /// True when the hue channel is missing (`none` or achromatic)
    pub fn is_achromatic(&self) -> bool {
        self.hue.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_coral_to_oklch() {
        let c = Srgb::from_u8(0xFF, 0x7F, 0x50).to_oklch();
        assert!(close(c.lightness, 0.735_11), "{c:?}");
        assert!(close(c.chroma, 0.167_99), "{c:?}");
        assert!(close(c.hue, 40.246_66), "{c:?}");
    }

    #[test]
    fn test_white_and_black_are_achromatic() {
        let white = Srgb::from_u8(255, 255, 255).to_oklch();
        assert!(white.is_achromatic());
        assert!(close(white.lightness, 1.0));

        let black = Srgb::from_u8(0, 0, 0).to_oklch();
        assert!(black.is_achromatic());
        assert!(close(black.lightness, 0.0));
        assert!(close(black.chroma, 0.0));
    }

    #[test]
    fn test_hsl_primaries() {
        let blue = Srgb::from_hsl(240.0, 1.0, 0.5, 1.0);
        assert!(close(blue.red, 0.0) && close(blue.green, 0.0) && close(blue.blue, 1.0));

        let red = Srgb::from_hsl(-360.0, 1.0, 0.5, 1.0);
        assert!(close(red.red, 1.0) && close(red.green, 0.0) && close(red.blue, 0.0));

        let gray = Srgb::from_hsl(120.0, 0.0, 0.5, 1.0);
        assert!(close(gray.red, 0.5) && close(gray.green, 0.5) && close(gray.blue, 0.5));
    }

    #[test]
    fn test_alpha_is_preserved() {
        let c = Srgb::new(1.0, 0.0, 0.0, 0.25).to_oklch();
        assert!(close(c.alpha, 0.25));
    }
}
