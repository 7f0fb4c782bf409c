pub mod dictation;
pub mod navigation;
pub mod session;
pub mod suggestions;
pub mod visibility;
