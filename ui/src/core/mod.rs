//! Platform glue and small pure helpers shared by the news view.

pub mod format;
pub mod platform;
pub mod sequence;
pub mod timing;
