pub mod buffer;
pub mod io;

pub use self::buffer::PixelBuffer;
pub use self::io::{decode_rgba, load_image, write_json_file};
