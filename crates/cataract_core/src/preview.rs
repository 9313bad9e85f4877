//! Fitting an uploaded image into the preview box.

use crate::config::Bounds;
use crate::upload::DecodedImage;
use image::{RgbaImage, imageops::FilterType};

/// Preview size after shrinking into [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledDimensions {
    pub width: f64,
    pub height: f64,
}

impl ScaledDimensions {
    /// Whole-pixel size of the drawing surface. Fractions are truncated the
    /// way a canvas truncates assigned dimensions; never smaller than 1 px.
    pub fn surface_size(&self) -> [u32; 2] {
        [
            (self.width.floor() as u32).max(1),
            (self.height.floor() as u32).max(1),
        ]
    }
}

/// Shrinks `width` x `height` into `bounds`, width first, then height.
///
/// Only shrinks: an image already inside the box comes back unchanged.
pub fn fit_within(width: f64, height: f64, bounds: Bounds) -> ScaledDimensions {
    let (mut w, mut h) = (width, height);
    if w > bounds.max_width {
        h *= bounds.max_width / w;
        w = bounds.max_width;
    }
    if h > bounds.max_height {
        w *= bounds.max_height / h;
        h = bounds.max_height;
    }
    ScaledDimensions {
        width: w,
        height: h,
    }
}

pub fn scaled_for(image: &DecodedImage, bounds: Bounds) -> ScaledDimensions {
    fit_within(f64::from(image.width()), f64::from(image.height()), bounds)
}

/// Resamples the decoded pixels to the preview surface.
pub fn render(image: &DecodedImage, dims: ScaledDimensions) -> RgbaImage {
    let [w, h] = dims.surface_size();
    if (w, h) == (image.width(), image.height()) {
        return image.pixels().clone();
    }
    image::imageops::resize(image.pixels(), w, h, FilterType::Triangle)
}
