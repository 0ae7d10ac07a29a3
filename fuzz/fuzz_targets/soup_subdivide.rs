#![no_main]

use libfuzzer_sys::fuzz_target;
use lowpoly_mesh::{TriangleSoup, subdivide};

fuzz_target!(|data: Vec<f32>| {
    // from_raw rejects unaligned buffers; anything it accepts must survive
    // a subdivision round without panicking
    if let Ok(soup) = TriangleSoup::from_raw(&data) {
        let split = subdivide(&soup, 1);
        assert_eq!(split.triangle_count(), soup.triangle_count() * 4);
    }
});
