pub mod image_file_reader;
pub mod image_file_writer;
pub mod jpeg_encoder;
pub mod rgb_conversion;
pub mod thumbnail;
