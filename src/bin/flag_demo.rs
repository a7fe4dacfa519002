//! Writes a 30x20 tricolor flag to `out.bmp`, reads it back, and previews it
//! in the terminal.

use bmp24::Bitmap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut flag = Bitmap::new(30, 20)?;
    flag.fill(0, 0, 9, 19, 0x0055A4);
    flag.fill(10, 0, 19, 19, 0xFFFFFF);
    flag.fill(20, 0, 29, 19, 0xF04135);
    bmp24::write_bitmap(&flag, "out.bmp")?;

    let (header, rows) = bmp24::read_bitmap("out.bmp")?;
    println!(
        "out.bmp: {}x{}, {} bytes",
        header.width, header.height, header.file_size
    );
    bmp24::print_rows(&rows)?;
    Ok(())
}
