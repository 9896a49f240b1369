use std::path::Path;

/// Sniff the MIME type of a label photo from its magic bytes.
pub fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        [_, _, _, _, 0x66, 0x74, 0x79, 0x70, 0x68, 0x65, 0x69, 0x63, ..] => Some("image/heic"),
        _ => None,
    }
}

/// MIME type for an image file, by content first and extension second.
pub fn image_mime_for(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    if let Some(mime) = detect_image_mime(bytes) {
        return Some(mime);
    }

    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        _ => return None,
    };
    tracing::warn!(
        "Unrecognized image signature (first 4 bytes: {:02X?}), using extension .{}",
        &bytes[..bytes.len().min(4)],
        ext
    );
    Some(mime)
}
