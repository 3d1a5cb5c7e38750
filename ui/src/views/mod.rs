mod news;
pub use news::News;
