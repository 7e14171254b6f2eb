pub mod movie;
pub mod movie_producer;
pub mod movie_studio;
pub mod producer;
pub mod studio;
