//! Display formatting for terminal output

pub mod movie;

pub use movie::{format_movie_list, RenderDefaults};
