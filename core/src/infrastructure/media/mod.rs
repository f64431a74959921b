pub mod data_uri;

pub use data_uri::{encode_data_uri, mime_type_for, read_image_as_data_uri};
