pub(crate) mod core;

mod favorites;
mod likes;
mod token;
