use std::num::NonZeroU32;

use fast_image_resize as fr;

use super::{CaptureError, CaptureOptions};

/// Largest square centred in a `width × height` image, as
/// `(left, top, side)`.
pub fn square_crop_box(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Copies the centred square out of `rgba`, so that nothing outside
/// of it is left for the resampling filter to read.
pub fn crop_square(rgba: &[u8], width: u32, height: u32) -> (Vec<u8>, u32) {
    let (left, top, side) = square_crop_box(width, height);
    let (stride, row) = (width as usize * 4, side as usize * 4);
    let start = left as usize * 4;

    let mut square = Vec::with_capacity(row * side as usize);
    for y in top as usize..(top + side) as usize {
        let offset = y * stride + start;
        square.extend_from_slice(&rgba[offset..offset + row]);
    }

    (square, side)
}

/// Crops (when requested) and resizes RGBA pixels to exactly
/// `options.width × options.height`.
pub fn fit(
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    options: &CaptureOptions,
) -> Result<Vec<u8>, CaptureError> {
    let nz = |v: u32| NonZeroU32::new(v).ok_or(CaptureError::Resize("empty image".to_string()));

    if rgba.len() != width as usize * height as usize * 4 {
        return Err(CaptureError::Resize("buffer size mismatch".to_string()));
    }

    let (pixels, width, height) = if options.cropping {
        let (square, side) = crop_square(&rgba, width, height);
        (square, side, side)
    } else {
        (rgba, width, height)
    };

    let src = fr::Image::from_vec_u8(nz(width)?, nz(height)?, pixels, fr::PixelType::U8x4)
        .map_err(|e| CaptureError::Resize(e.to_string()))?;

    let mut dst = fr::Image::new(
        nz(options.width)?,
        nz(options.height)?,
        src.pixel_type(),
    );

    fr::Resizer::new(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3))
        .resize(&src.view(), &mut dst.view_mut())
        .map_err(|e| CaptureError::Resize(e.to_string()))?;

    Ok(dst.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_box() {
        assert_eq!(square_crop_box(100, 100), (0, 0, 100));
        assert_eq!(square_crop_box(300, 100), (100, 0, 100));
        assert_eq!(square_crop_box(100, 301), (0, 100, 100));
        assert_eq!(square_crop_box(1, 1), (0, 0, 1));
    }

    #[test]
    fn square_is_copied_from_centre() {
        // 3×2 image, pixel value is its x coordinate
        let rgba: Vec<u8> = (0..2).flat_map(|_| (0..3u8).flat_map(|x| [x; 4])).collect();
        let (square, side) = crop_square(&rgba, 3, 2);

        assert_eq!(side, 2);
        assert_eq!(square, [0, 0, 0, 0, 1, 1, 1, 1].repeat(2));
    }

    fn close(p: &[u8], q: [u8; 4]) -> bool {
        p.iter().zip(q).all(|(a, b)| a.abs_diff(b) <= 1)
    }

    fn solid(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
        px.repeat((width * height) as usize)
    }

    #[test]
    fn fits_to_target_size() {
        let options = CaptureOptions::default();
        let out = fit(solid(640, 480, [10, 20, 30, 255]), 640, 480, &options).unwrap();

        assert_eq!(out.len(), (100 * 100 * 4) as usize);
        // solid colour survives resampling
        assert!(out.chunks(4).all(|p| close(p, [10, 20, 30, 255])));
    }

    #[test]
    fn cropping_keeps_centre() {
        // left third red, middle third green, right third blue
        let (w, h) = (300, 100);
        let mut rgba = Vec::with_capacity((w * h * 4) as usize);
        for _ in 0..h {
            for x in 0..w {
                let px: [u8; 4] = match x / 100 {
                    0 => [255, 0, 0, 255],
                    1 => [0, 255, 0, 255],
                    _ => [0, 0, 255, 255],
                };
                rgba.extend_from_slice(&px);
            }
        }

        let options = CaptureOptions {
            width: 10,
            height: 10,
            cropping: true,
        };
        let out = fit(rgba, w, h, &options).unwrap();

        assert!(out.chunks(4).all(|p| close(p, [0, 255, 0, 255])));
    }

    #[test]
    fn empty_target_is_error() {
        let options = CaptureOptions {
            width: 0,
            height: 100,
            cropping: true,
        };
        assert!(matches!(
            fit(solid(2, 2, [0; 4]), 2, 2, &options),
            Err(CaptureError::Resize(_))
        ));
    }
}
