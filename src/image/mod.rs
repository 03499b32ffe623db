pub mod io;
pub mod rgb;

pub use self::io::RgbImageBuffer;
pub use self::rgb::RgbImageU8;
