pub mod catalog_loader;
pub mod http_backend;
pub mod speech_command;
