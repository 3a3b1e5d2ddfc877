use crate::foundation::error::{ChoreoError, ChoreoResult};

/// 8-bit RGB triple decoded from a `#RRGGBB` color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parse a strict 6-hex-digit color string (`#RRGGBB`, case-insensitive).
    pub fn parse_hex(s: &str) -> ChoreoResult<Self> {
        let body = s.strip_prefix('#').ok_or_else(|| {
            ChoreoError::value(format!("color {s:?} must start with '#'"))
        })?;
        if body.len() != 6 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChoreoError::value(format!(
                "color {s:?} must be #RRGGBB (exactly 6 hex digits)"
            )));
        }

        fn hex_byte(pair: &str) -> ChoreoResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ChoreoError::value(format!("invalid hex byte {pair:?}")))
        }

        Ok(Self {
            r: hex_byte(&body[0..2])?,
            g: hex_byte(&body[2..4])?,
            b: hex_byte(&body[4..6])?,
        })
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as `f64` in `0..=255`, in RGB order.
    pub fn channels_f64(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Rebuild from `f64` channels, rounding to nearest and clamping to `0..=255`.
    pub fn from_channels_f64(channels: [f64; 3]) -> Self {
        fn quantize(x: f64) -> u8 {
            x.round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: quantize(channels[0]),
            g: quantize(channels[1]),
            b: quantize(channels[2]),
        }
    }
}
