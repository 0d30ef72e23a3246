pub mod batch;
pub mod blur;
pub mod buffer;
pub mod fit;
pub mod png_io;

pub use batch::{output_path_for, FrameOutcome, RenderJob};
pub use blur::{gaussian_blur, MAX_BLUR_RADIUS};
pub use buffer::{from_image_buffer, to_image_buffer};
pub use fit::{fit_within, fitted_size};
pub use png_io::{decode_png, encode_png, read_png, write_png};
