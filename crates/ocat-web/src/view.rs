pub mod form;
pub mod format;
pub mod list;
