pub mod entities;
pub mod extract;
