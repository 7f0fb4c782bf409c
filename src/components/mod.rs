pub mod composer;
pub mod footer;
pub mod header;
pub mod quick_replies;
pub mod suggestions;
pub mod transcript;
