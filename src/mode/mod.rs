
pub mod calculation;
