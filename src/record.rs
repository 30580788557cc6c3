//! The color record returned by the lookup service.
//!
//! Only [`ColorName::value`] is interpreted; every other block is carried through
//! untouched so callers can render or re-serialize it.

use serde::{Deserialize, Serialize};

/// One named color, as reported by the lookup service for an HSL triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub name: ColorName,
    #[serde(default)]
    pub hex: Hex,
    #[serde(default)]
    pub rgb: Rgb,
    #[serde(default)]
    pub hsl: Hsl,
    #[serde(default)]
    pub hsv: Hsv,
    #[serde(default)]
    pub cmyk: Cmyk,
    #[serde(default, rename = "XYZ")]
    pub xyz: Xyz,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub contrast: Contrast,
    /// The hue this record was requested for. Not part of the service response; set
    /// by the lookup that fetched it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampled_hue: Option<u16>,
}

impl ColorRecord {
    /// The canonical color name, used as the deduplication key.
    pub fn name(&self) -> &str {
        &self.name.value
    }

    /// Hue in degrees as echoed back by the service. For achromatic colors the
    /// service reports 0 whatever hue was asked for; see [`ColorRecord::sampled_hue`].
    pub fn echoed_hue(&self) -> f64 {
        self.hsl.h
    }

    /// Tags the record with the hue it was requested for.
    pub fn with_sampled_hue(mut self, hue: u16) -> Self {
        self.sampled_hue = Some(hue);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorName {
    pub value: String,
    #[serde(default)]
    pub closest_named_hex: String,
    #[serde(default)]
    pub exact_match_name: bool,
    #[serde(default)]
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hex {
    pub value: String,
    pub clean: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rgb {
    pub fraction: RgbFraction,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RgbFraction {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hsl {
    pub fraction: HslFraction,
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HslFraction {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hsv {
    pub fraction: HsvFraction,
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvFraction {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cmyk {
    pub fraction: CmykFraction,
    pub c: Option<f64>,
    pub m: Option<f64>,
    pub y: Option<f64>,
    pub k: Option<f64>,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmykFraction {
    pub c: Option<f64>,
    pub m: Option<f64>,
    pub y: Option<f64>,
    pub k: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xyz {
    pub fraction: XyzFraction,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XyzFraction {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub bare: String,
    pub named: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contrast {
    pub value: String,
}

/// Builds a minimal record for tests: just a name and an HSL echo.
#[cfg(test)]
pub(crate) fn named(name: &str, hue: u16) -> ColorRecord {
    ColorRecord {
        name: ColorName {
            value: name.to_string(),
            closest_named_hex: String::new(),
            exact_match_name: false,
            distance: 0.0,
        },
        hex: Hex::default(),
        rgb: Rgb::default(),
        hsl: Hsl {
            h: f64::from(hue),
            ..Hsl::default()
        },
        hsv: Hsv::default(),
        cmyk: Cmyk::default(),
        xyz: Xyz::default(),
        image: Image::default(),
        contrast: Contrast::default(),
        sampled_hue: Some(hue),
    }
}
