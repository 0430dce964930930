pub mod citation;
pub mod prose;
pub mod sources;
