pub mod core;
pub mod evaluations;
pub mod export;
pub mod imports;
pub mod rubric;
pub mod students;
pub mod wizard;
