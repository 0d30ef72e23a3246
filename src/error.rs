use lofi_dither::{ParseColorError, PipelineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Image buffer error: {0}")]
    Buffer(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Invalid palette color: {0}")]
    Palette(#[from] ParseColorError),

    #[error("Unknown palette group: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_decode() {
        let error = RenderError::Decode("invalid signature".to_string());
        assert_eq!(error.to_string(), "PNG decode error: invalid signature");
    }

    #[test]
    fn test_render_error_encode() {
        let error = RenderError::Encode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_render_error_unsupported_format() {
        let error = RenderError::UnsupportedFormat("16-bit indexed".to_string());
        assert_eq!(error.to_string(), "Unsupported image format: 16-bit indexed");
    }

    #[test]
    fn test_render_error_buffer() {
        let error = RenderError::Buffer("70000x70000 exceeds u32".to_string());
        assert_eq!(error.to_string(), "Image buffer error: 70000x70000 exceeds u32");
    }

    #[test]
    fn test_render_error_unknown_preset() {
        let error = RenderError::UnknownPreset("Vaporwave".to_string());
        assert_eq!(error.to_string(), "Unknown palette group: Vaporwave");
    }

    #[test]
    fn test_render_error_from_pipeline_error() {
        let error: RenderError = PipelineError::EmptyImage {
            width: 0,
            height: 4,
        }
        .into();
        assert_eq!(error.to_string(), "Pipeline error: image is empty (0x4)");
    }

    #[test]
    fn test_render_error_from_parse_color_error() {
        let error: RenderError = ParseColorError::InvalidLength.into();
        assert!(matches!(error, RenderError::Palette(_)));
    }

    #[test]
    fn test_render_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let error: RenderError = io.into();
        assert_eq!(error.to_string(), "IO error: missing.png");
    }
}
