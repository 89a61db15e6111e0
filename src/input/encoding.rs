/// UTF-8 BOM bytes
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// UTF-16 LE BOM
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];

/// UTF-16 BE BOM
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Detect the encoding of the given bytes
///
/// Returns one of: "UTF-8", "UTF-8-BOM", "UTF-16LE", "UTF-16BE", "Windows-1252"
pub fn detect_encoding(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(UTF8_BOM) {
        return "UTF-8-BOM";
    }
    if bytes.starts_with(UTF16_LE_BOM) {
        return "UTF-16LE";
    }
    if bytes.starts_with(UTF16_BE_BOM) {
        return "UTF-16BE";
    }

    if std::str::from_utf8(bytes).is_ok() {
        return "UTF-8";
    }

    "Windows-1252"
}

/// Decode bytes to a String using the detected encoding.
/// Malformed sequences become U+FFFD rather than failing.
pub fn decode_bytes(bytes: &[u8], encoding: &str) -> String {
    let codec = match encoding {
        "UTF-8" | "UTF-8-BOM" => encoding_rs::UTF_8,
        "UTF-16LE" => encoding_rs::UTF_16LE,
        "UTF-16BE" => encoding_rs::UTF_16BE,
        _ => encoding_rs::WINDOWS_1252,
    };

    // decode() strips a matching BOM itself
    let (cow, _, _) = codec.decode(bytes);
    cow.into_owned()
}

/// A `\n` encoded the way `encoding` stores it
pub fn line_terminator(encoding: &str) -> &'static [u8] {
    match encoding {
        "UTF-16LE" => &[0x0A, 0x00],
        "UTF-16BE" => &[0x00, 0x0A],
        _ => b"\n",
    }
}
