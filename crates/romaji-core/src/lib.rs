pub mod romaji;
pub mod segment;
pub mod unicode;
