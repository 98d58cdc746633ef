pub mod gemini_client;
pub mod openai_client;
pub mod provider;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAILLMClient;
pub use provider::LLMProvider;

/// Best effort content type from the file signature. Unknown data is sent as JPEG.
pub(crate) fn image_mime_type(data: &[u8]) -> &'static str {
    match data {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime_type_from_signature() {
        assert_eq!(image_mime_type(b"\x89PNG\r\n\x1a\n...."), "image/png");
        assert_eq!(image_mime_type(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(image_mime_type(b"GIF89a"), "image/gif");
        assert_eq!(image_mime_type(b"\xff\xd8\xff\xe0"), "image/jpeg");
        assert_eq!(image_mime_type(b""), "image/jpeg");
    }
}
