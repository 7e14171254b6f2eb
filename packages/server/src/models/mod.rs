pub mod interval;
pub mod movie;
