pub mod base_directory;
pub mod path_error;
