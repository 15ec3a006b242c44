pub mod history;
pub mod summary;
pub mod upload;
pub mod warning;
