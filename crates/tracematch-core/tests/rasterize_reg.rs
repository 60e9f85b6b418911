//! Rasterization regression test
//!
//! Exercises the raster-to-vector pipeline: grid geometry, value range,
//! determinism, and the exact black/white conversions at a tiny grid size.

use tracematch_core::Raster;
use tracematch_test::RegParams;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    let data: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take((width as usize) * (height as usize) * 4)
        .collect();
    Raster::from_rgba_data(width, height, data).unwrap()
}

// ==========================================================================
// Test 1: vector geometry and value range
// ==========================================================================

#[test]
fn rasterize_reg_geometry() {
    let mut rp = RegParams::new("rasterize_geometry");

    // A non-square source with mixed channel values, downsampled to 5x5.
    let mut data = Vec::new();
    for i in 0..(13 * 9) {
        let v = (i * 7 % 256) as u8;
        data.extend_from_slice(&[v, v.wrapping_add(40), v.wrapping_mul(3), 255]);
    }
    let raster = Raster::from_rgba_data(13, 9, data).unwrap();

    let v = raster.intensity_vector(5).expect("intensity_vector failed");
    rp.compare_values(25.0, v.len() as f64, 0.0);

    let in_range = v.as_slice().iter().all(|&g| (0.0..=255.0).contains(&g));
    rp.compare_values(1.0, if in_range { 1.0 } else { 0.0 }, 0.0);

    // Upsampling also lands on the requested grid.
    let small = solid(1, 1, [9, 9, 9, 255]);
    let up = small.intensity_vector(6).unwrap();
    rp.compare_values(36.0, up.len() as f64, 0.0);

    assert!(rp.cleanup(), "rasterize_reg geometry tests failed");
}

// ==========================================================================
// Test 2: determinism
// ==========================================================================

#[test]
fn rasterize_reg_determinism() {
    let mut rp = RegParams::new("rasterize_determinism");

    let mut data = Vec::new();
    for i in 0..(20 * 20) {
        let v = (i % 256) as u8;
        data.extend_from_slice(&[v, 255 - v, v / 2, 255]);
    }
    let raster = Raster::from_rgba_data(20, 20, data).unwrap();

    let first = raster.intensity_vector(7).unwrap();
    let second = raster.intensity_vector(7).unwrap();
    rp.compare_slices(first.as_slice(), second.as_slice(), 0.0);

    // A cloned raster converts identically as well.
    let third = raster.clone().intensity_vector(7).unwrap();
    rp.compare_slices(first.as_slice(), third.as_slice(), 0.0);

    assert!(rp.cleanup(), "rasterize_reg determinism tests failed");
}

// ==========================================================================
// Test 3: black and white extremes at grid side 2
// ==========================================================================

#[test]
fn rasterize_reg_extremes() {
    let mut rp = RegParams::new("rasterize_extremes");

    let black = solid(2, 2, [0, 0, 0, 255]);
    let v = black.intensity_vector(2).unwrap();
    rp.compare_slices(&[0.0, 0.0, 0.0, 0.0], v.as_slice(), 0.0);

    let white = solid(2, 2, [255, 255, 255, 255]);
    let v = white.intensity_vector(2).unwrap();
    rp.compare_slices(&[255.0, 255.0, 255.0, 255.0], v.as_slice(), 1e-3);

    // Uniform sources stay uniform through resampling.
    let big_white = solid(10, 10, [255, 255, 255, 255]);
    let v = big_white.intensity_vector(2).unwrap();
    rp.compare_slices(&[255.0, 255.0, 255.0, 255.0], v.as_slice(), 1e-3);

    assert!(rp.cleanup(), "rasterize_reg extremes tests failed");
}
