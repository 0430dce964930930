pub mod evidence;
pub mod not_found;
pub mod sources;
