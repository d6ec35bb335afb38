// Widget state
pub mod selection;
