pub mod ansi;
pub mod base;
pub mod html;
pub mod options;
