#![no_main]
use bmp24::Bitmap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything we can decode must re-encode to the same pixels.
    let Ok((header, rows)) = bmp24::decode(data) else {
        return;
    };

    let Ok(mut bitmap) = Bitmap::new(header.width, header.height) else {
        return;
    };
    // Stored row 0 is the bottom visual row.
    for (i, row) in rows.iter().enumerate() {
        let y = header.height as i32 - 1 - i as i32;
        for (x, px) in row.iter().enumerate() {
            let color =
                (u32::from(px.r) << 16) | (u32::from(px.g) << 8) | u32::from(px.b);
            bitmap.set_pixel(x as i32, y, color);
        }
    }

    let reencoded = bmp24::encode(&bitmap).expect("decoded dimensions must re-encode");
    let (header2, rows2) = bmp24::decode(&reencoded).expect("re-encoded data failed to decode");

    assert_eq!(header.width, header2.width);
    assert_eq!(header.height, header2.height);
    assert_eq!(rows, rows2, "roundtrip pixel mismatch");
});
