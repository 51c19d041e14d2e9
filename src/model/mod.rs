pub mod job;
pub mod placeholder;
pub mod translator;
pub mod walker;
