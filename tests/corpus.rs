//! Test corpus: roundtrips over many widths, heights, gaps and patterns.

mod common;

use bmpraster::*;
use common::{BmpBuilder, gradient_pixels, noise_pixels};

fn checkerboard(w: usize, h: usize) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                pixels.push(Pixel::new(200, 220, 240));
            } else {
                pixels.push(Pixel::new(10, 40, 70));
            }
        }
    }
    pixels
}

fn roundtrip(builder: &BmpBuilder, pixels: &[Pixel]) -> Bitmap {
    let encoded = builder.build(pixels);
    let decoded = decode_bmp(&encoded[..]).unwrap();
    assert_eq!(decoded.width(), builder.width as usize);
    assert_eq!(decoded.height(), builder.height as usize);
    assert_eq!(decoded.raster().pixels(), pixels);
    decoded
}

// ── Row padding ─────────────────────────────────────────────────────

#[test]
fn every_padding_class() {
    // width % 4 covers 0, 3, 2 and 1 padding bytes
    for w in 1..=9 {
        for h in [1, 2, 5] {
            let pixels = noise_pixels(w, h, 0xDEAD_BEEF ^ (w * 31 + h) as u32);
            let decoded = roundtrip(&BmpBuilder::new(w as i32, h as i32), &pixels);
            let stride = decoded.info_header().row_stride() as usize;
            assert_eq!(stride % 4, 0);
            assert!(stride - w * 3 < 4);
        }
    }
}

#[test]
fn stride_table() {
    for (w, stride) in [(0, 0), (1, 4), (2, 8), (3, 12), (4, 12), (5, 16), (100, 300), (101, 304)] {
        assert_eq!(row_stride(24, w), stride, "width {w}");
        assert_eq!(row_stride(24, w), (u64::from(w) * 3 + 3) / 4 * 4);
    }
}

// ── Sizes and patterns ──────────────────────────────────────────────

#[test]
fn flat_checkerboard() {
    let pixels = checkerboard(10, 8);
    roundtrip(&BmpBuilder::new(10, 8), &pixels);
}

#[test]
fn single_pixel() {
    let decoded = roundtrip(&BmpBuilder::new(1, 1), &[Pixel::new(9, 8, 7)]);
    assert_eq!(decoded.raster().get(0, 0), Some(Pixel::new(9, 8, 7)));
}

#[test]
fn single_row_and_single_column() {
    roundtrip(&BmpBuilder::new(257, 1), &gradient_pixels(257, 1));
    roundtrip(&BmpBuilder::new(1, 257), &gradient_pixels(1, 257));
}

#[test]
fn large_noise_image() {
    let pixels = noise_pixels(1999, 37, 0x1234_5678);
    roundtrip(&BmpBuilder::new(1999, 37), &pixels);
}

#[test]
fn rows_keep_bottom_up_order() {
    // stored row y holds green == y
    let pixels = gradient_pixels(3, 6);
    let decoded = roundtrip(&BmpBuilder::new(3, 6), &pixels);
    for (y, row) in decoded.raster().rows().enumerate() {
        assert!(row.iter().all(|p| p.g == y as u8));
    }
}

// ── Gaps ────────────────────────────────────────────────────────────

#[test]
fn gap_lengths() {
    let pixels = noise_pixels(5, 4, 99);
    for n in [1, 2, 3, 4, 12, 68, 1024, 70_000] {
        let mut builder = BmpBuilder::new(5, 4);
        builder.gap = (0..n).map(|i| (i * 7) as u8).collect();
        let decoded = roundtrip(&builder, &pixels);
        assert_eq!(decoded.file_header().pixel_offset, 54 + n as u32);
    }
}

#[test]
fn every_offset_below_headers_is_malformed() {
    let pixels = checkerboard(2, 2);
    for offset in [0, 1, 14, 40, 53] {
        let mut builder = BmpBuilder::new(2, 2);
        builder.pixel_offset = Some(offset);
        let data = builder.build(&pixels);
        assert!(
            matches!(decode_bmp(&data[..]), Err(BitmapError::MalformedHeader { .. })),
            "offset {offset}"
        );
    }
}

// ── Truncation sweep ────────────────────────────────────────────────

#[test]
fn every_prefix_is_truncated() {
    let pixels = noise_pixels(3, 3, 5);
    let mut builder = BmpBuilder::new(3, 3);
    builder.gap = vec![0; 6];
    let data = builder.build(&pixels);
    for len in 0..data.len() {
        match decode_bmp(&data[..len]) {
            Err(BitmapError::TruncatedInput { offset }) => assert_eq!(offset, len as u64),
            other => panic!("prefix {len}: expected TruncatedInput, got {other:?}"),
        }
    }
    assert!(decode_bmp(&data[..]).is_ok());
}
