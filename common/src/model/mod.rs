pub mod media;
pub mod source;
