#![forbid(unsafe_code)]

pub mod compile;
pub mod directive;
pub mod error;
pub mod gateway;
pub mod settings;
pub mod url;
pub mod validate;

pub use compile::{compile_compression, compile_gif, compile_image_to_video, compile_reverse};
pub use directive::{Segment, Token, Transformation};
pub use error::{ClipforgeError, ClipforgeResult};
pub use gateway::{MediaGateway, ResourceInfo, UploadedResource};
pub use settings::{CompressionSettings, GifSettings, ImageToVideoSettings, ReverseSettings};
pub use url::{assemble, delivery_base};
pub use validate::{
    validate_compression, validate_gif, validate_image_to_video, validate_reverse,
};
