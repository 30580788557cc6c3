use image::Rgba;
use palette::{FromColor, Hsl, LinSrgb, Srgb};

/// Relative luminance above which black ink reads better than white.
const INK_LUMINANCE_THRESHOLD: f32 = 0.179;

/// Converts an HSL color to RGBA locally, without asking the lookup service.
///
/// `saturation` and `lightness` are percentages and are clamped to `[0, 100]`.
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: u8) -> Rgba<u8> {
    let saturation = (saturation / 100.0).clamp(0.0, 1.0);
    let lightness = (lightness / 100.0).clamp(0.0, 1.0);

    let hsl_color: Hsl = Hsl::new(hue, saturation, lightness);
    let srgb: Srgb<f32> = Srgb::from_color(hsl_color);
    let srgb_u8: Srgb<u8> = srgb.into_format();

    Rgba([srgb_u8.red, srgb_u8.green, srgb_u8.blue, alpha])
}

/// Picks black or white, whichever contrasts more with `color`.
pub fn contrast_ink(color: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = color.0;
    let linear: LinSrgb<f32> = Srgb::new(r, g, b).into_format::<f32>().into_linear();
    let luminance = 0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue;

    if luminance > INK_LUMINANCE_THRESHOLD {
        Rgba([0, 0, 0, 255])
    } else {
        Rgba([255, 255, 255, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_to_rgba_works() {
        assert_eq!(hsl_to_rgba(0.0, 100.0, 50.0, 255), Rgba([255, 0, 0, 255]));
        assert_eq!(hsl_to_rgba(120.0, 100.0, 50.0, 255), Rgba([0, 255, 0, 255]));
        assert_eq!(hsl_to_rgba(240.0, 100.0, 50.0, 128), Rgba([0, 0, 255, 128]));
        assert_eq!(hsl_to_rgba(0.0, 90.0, 50.0, 255), Rgba([242, 13, 13, 255]));
        assert_eq!(hsl_to_rgba(200.0, 0.0, 0.0, 255), Rgba([0, 0, 0, 255]));
        assert_eq!(
            hsl_to_rgba(200.0, 0.0, 100.0, 255),
            Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        assert_eq!(
            hsl_to_rgba(0.0, 250.0, 50.0, 255),
            hsl_to_rgba(0.0, 100.0, 50.0, 255)
        );
        assert_eq!(hsl_to_rgba(0.0, 100.0, -10.0, 255), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn contrast_ink_works() {
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        assert_eq!(contrast_ink(Rgba([255, 255, 255, 255])), black);
        assert_eq!(contrast_ink(Rgba([255, 255, 0, 255])), black);
        assert_eq!(contrast_ink(Rgba([0, 0, 0, 255])), white);
        assert_eq!(contrast_ink(Rgba([0, 0, 255, 255])), white);
    }
}
