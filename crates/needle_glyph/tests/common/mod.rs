//! Minimal in-memory TrueType fonts for tests.

/// A font named "Box" with 1000 units per em:
/// - 'A' is a filled rectangle 500 wide and 1000 tall, sitting on the baseline
/// - 'B' maps to a glyph with no outline
/// - every other character is unmapped
pub fn box_font() -> Vec<u8> {
    let tables: Vec<(&[u8; 4], Vec<u8>)> = vec![
        (b"cmap", cmap()),
        (b"glyf", glyf()),
        (b"head", head()),
        (b"hhea", hhea()),
        (b"loca", loca()),
        (b"maxp", maxp()),
        (b"name", name("Box")),
    ];

    let mut font = Vec::new();
    font.extend(0x0001_0000u32.to_be_bytes());
    font.extend((tables.len() as u16).to_be_bytes());
    font.extend([0u8; 6]); // search range, entry selector, range shift

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        font.extend(*tag);
        font.extend(0u32.to_be_bytes());
        font.extend((offset as u32).to_be_bytes());
        font.extend((data.len() as u32).to_be_bytes());
        offset += data.len();
    }
    for (_, data) in &tables {
        font.extend(data);
    }
    font
}

fn be16(out: &mut Vec<u8>, values: &[i32]) {
    for &v in values {
        out.extend((v as u16).to_be_bytes());
    }
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0001_0000u32.to_be_bytes()); // version
    t.extend(0x0001_0000u32.to_be_bytes()); // font revision
    t.extend(0u32.to_be_bytes()); // checksum adjustment
    t.extend(0x5F0F_3CF5u32.to_be_bytes()); // magic
    be16(&mut t, &[0, 1000]); // flags, units per em
    t.extend([0u8; 16]); // created, modified
    be16(&mut t, &[0, 0, 500, 1000]); // bbox
    be16(&mut t, &[0, 8, 2, 0, 0]); // mac style, lowest ppem, direction, short loca, glyph format
    t
}

fn hhea() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0001_0000u32.to_be_bytes());
    be16(&mut t, &[1000, 0, 0]); // ascender, descender, line gap
    t.extend([0u8; 24]);
    be16(&mut t, &[0]); // number of h metrics
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0000_5000u32.to_be_bytes());
    be16(&mut t, &[3]);
    t
}

/// Unicode platform, format 6 subtable mapping 'A' → 1 and 'B' → 2.
fn cmap() -> Vec<u8> {
    let mut t = Vec::new();
    be16(&mut t, &[0, 1]); // version, number of subtables
    be16(&mut t, &[0, 3]); // platform Unicode, encoding BMP
    t.extend(12u32.to_be_bytes());
    be16(&mut t, &[6, 14, 0, 'A' as i32, 2, 1, 2]);
    t
}

fn square_glyph() -> Vec<u8> {
    let mut g = Vec::new();
    be16(&mut g, &[1, 0, 0, 500, 1000]); // one contour, bbox
    be16(&mut g, &[3, 0]); // last point index, no instructions
    g.extend([0x01u8; 4]); // on-curve, 16-bit deltas
    be16(&mut g, &[0, 500, 0, -500]); // x deltas
    be16(&mut g, &[0, 0, 1000, 0]); // y deltas
    g
}

fn glyf() -> Vec<u8> {
    square_glyph()
}

/// Short offsets: glyph 0 empty, glyph 1 the square, glyph 2 empty.
fn loca() -> Vec<u8> {
    let len = square_glyph().len() as i32;
    let mut t = Vec::new();
    be16(&mut t, &[0, 0, len / 2, len / 2]);
    t
}

fn name(family: &str) -> Vec<u8> {
    let encoded: Vec<u8> = family.encode_utf16().flat_map(u16::to_be_bytes).collect();
    let mut t = Vec::new();
    be16(&mut t, &[0, 1, 6 + 12]); // format, count, storage offset
    be16(&mut t, &[3, 1, 0x409, 1, encoded.len() as i32, 0]);
    t.extend(encoded);
    t
}
