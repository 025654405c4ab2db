pub mod frame_encoder;
pub mod frame_reader;
pub mod image_writer;
