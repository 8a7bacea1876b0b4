//! Deterministic fill colors for ranked chart entries.
//!
//! Rank 0 maps to the warm end of the ramp and the last rank to the cool end,
//! so the most demanded skill always renders in the same color regardless of
//! dataset or run.

/// One sRGB color sampled from the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 luma weights).
    fn brightness(self) -> u32 {
        (299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)) / 1000
    }
}

/// Label color that stays readable against `background`.
pub fn text_color(background: Rgb) -> &'static str {
    if background.brightness() > 128 {
        "black"
    } else {
        "white"
    }
}

/// Warm ramp: dark violet at 0.0 through reds to yellow-green at 1.0.
///
/// Long-arc cubehelix interpolation between (-100deg, 0.75, 0.35) and
/// (80deg, 1.50, 0.80).
pub fn warm(t: f64) -> Rgb {
    let h = -100.0 + 180.0 * t;
    let s = 0.75 + 0.75 * t;
    let l = 0.35 + 0.45 * t;
    cubehelix(h, s, l)
}

/// Fill color for entry `rank` out of `total` ranked entries, warmest first.
pub fn rank_color(rank: usize, total: usize) -> Rgb {
    if total <= 1 {
        return warm(1.0);
    }
    warm(1.0 - rank as f64 / (total - 1) as f64)
}

/// Fill colors for `total` ranked entries.
pub fn rank_colors(total: usize) -> Vec<Rgb> {
    (0..total).map(|rank| rank_color(rank, total)).collect()
}

fn cubehelix(h: f64, s: f64, l: f64) -> Rgb {
    let h = (h + 120.0).to_radians();
    let a = s * l * (1.0 - l);
    let (sin_h, cos_h) = h.sin_cos();
    Rgb {
        r: channel(l + a * (-0.14861 * cos_h + 1.78277 * sin_h)),
        g: channel(l + a * (-0.29227 * cos_h - 0.90649 * sin_h)),
        b: channel(l + a * (1.97294 * cos_h)),
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_anchors_match_reference_values() {
        assert_eq!(warm(0.0).hex(), "#6e40aa");
        assert_eq!(warm(0.5).hex(), "#ff5e63");
        assert_eq!(warm(1.0).hex(), "#aff05b");
    }

    #[test]
    fn first_rank_is_warmest() {
        assert_eq!(rank_color(0, 20), warm(1.0));
        assert_eq!(rank_color(19, 20), warm(0.0));
    }

    #[test]
    fn single_entry_gets_the_warm_end() {
        assert_eq!(rank_color(0, 1), warm(1.0));
        assert_eq!(rank_colors(1), vec![warm(1.0)]);
    }

    #[test]
    fn text_color_flips_on_brightness() {
        assert_eq!(text_color(warm(1.0)), "black");
        assert_eq!(text_color(warm(0.0)), "white");
        assert_eq!(text_color(Rgb { r: 255, g: 255, b: 255 }), "black");
        assert_eq!(text_color(Rgb { r: 0, g: 0, b: 0 }), "white");
    }
}
