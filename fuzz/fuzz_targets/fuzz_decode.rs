#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic; a successful decode must agree with its own headers.
    let _ = bmpraster::probe_bmp(data);

    let limits = bmpraster::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    if let Ok(bitmap) = bmpraster::DecodeRequest::new(data).with_limits(&limits).decode() {
        let info = bitmap.info_header();
        assert_eq!(bitmap.width(), info.width as usize);
        assert_eq!(bitmap.height(), info.height as usize);
        assert_eq!(bitmap.raster().pixels().len(), bitmap.width() * bitmap.height());
    }
});
