// Host-side tests for fitting a decoded world map to the device texture limit.

use globe_core::render::fit_map;
use image::{Rgba, RgbaImage};

#[test]
fn wide_map_is_clamped_to_the_limit() {
    let map = RgbaImage::new(9000, 2);
    let fitted = fit_map(&map, 8192).expect("oversized map is resized");
    assert_eq!(fitted.dimensions(), (8192, 2));
}

#[test]
fn tall_map_keeps_its_aspect_ratio() {
    let map = RgbaImage::new(100, 20000);
    let fitted = fit_map(&map, 8192).expect("oversized map is resized");
    assert_eq!(fitted.dimensions(), (41, 8192));
}

#[test]
fn thin_side_never_collapses_to_zero() {
    let map = RgbaImage::new(20000, 1);
    let fitted = fit_map(&map, 4096).expect("oversized map is resized");
    assert_eq!(fitted.dimensions(), (4096, 1));
}

#[test]
fn map_within_the_limit_is_left_alone() {
    assert!(fit_map(&RgbaImage::new(8192, 4096), 8192).is_none());
    assert!(fit_map(&RgbaImage::new(16, 8), 8192).is_none());
}

#[test]
fn resized_map_keeps_a_uniform_colour() {
    let map = RgbaImage::from_pixel(64, 32, Rgba([10, 120, 200, 255]));
    let fitted = fit_map(&map, 16).expect("oversized map is resized");
    assert_eq!(fitted.dimensions(), (16, 8));
    let expected = [10u8, 120, 200, 255];
    for pixel in fitted.pixels() {
        for (got, want) in pixel.0.iter().zip(expected) {
            assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
        }
    }
}
