use ff_core::DayState;

/// A color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Build from a `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Pack into a `0xRRGGBB` value, rounding each channel.
    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Linear blend towards `other` by `t`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }
}

/// Sky color and light intensities of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Background sky color.
    pub sky: Rgb,
    /// Ambient light intensity.
    pub ambient: f32,
    /// Directional sun intensity.
    pub sun: f32,
}

impl Lighting {
    /// The preset for a day state.
    pub fn for_state(state: DayState) -> Self {
        let (sky, ambient, sun) = match state {
            DayState::Morning => (0xffd4a0, 0.6, 0.7),
            DayState::Day => (0x87ceeb, 0.7, 0.9),
            DayState::Evening => (0xff8c42, 0.4, 0.5),
            DayState::Night => (0x1a1a3e, 0.2, 0.1),
        };
        Self {
            sky: Rgb::from_hex(sky),
            ambient,
            sun,
        }
    }

    /// Blend towards `other`. `t` is the linear progress; it is eased with
    /// [`smoothstep`] before blending.
    pub fn blend(self, other: Lighting, t: f32) -> Lighting {
        let ease = smoothstep(t);
        Lighting {
            sky: self.sky.lerp(other.sky, ease),
            ambient: lerp(self.ambient, other.ambient, ease),
            sun: lerp(self.sun, other.sun, ease),
        }
    }
}

/// Cubic ease-in-out of `t`, clamped to `0.0..=1.0`.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        for hex in [0xffd4a0, 0x87ceeb, 0xff8c42, 0x1a1a3e] {
            assert_eq!(Rgb::from_hex(hex).to_hex(), hex);
        }
    }

    #[test]
    fn presets_match_day_states() {
        let night = Lighting::for_state(DayState::Night);
        assert_eq!(night.sky.to_hex(), 0x1a1a3e);
        assert!((night.ambient - 0.2).abs() < f32::EPSILON);
        let day = Lighting::for_state(DayState::Day);
        assert!(day.sun > night.sun);
    }

    #[test]
    fn smoothstep_is_eased_and_clamped() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(2.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
        assert!(smoothstep(0.25) < 0.25);
    }

    #[test]
    fn blend_endpoints() {
        let a = Lighting::for_state(DayState::Morning);
        let b = Lighting::for_state(DayState::Evening);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0).sky.to_hex(), b.sky.to_hex());
        let mid = a.blend(b, 0.5);
        assert!(mid.ambient < a.ambient && mid.ambient > b.ambient);
    }
}
