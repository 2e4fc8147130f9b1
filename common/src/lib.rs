pub mod compare;
pub mod format;
pub mod model;
pub mod sort;
