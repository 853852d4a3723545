pub mod description;
pub mod loader;

pub use description::{parse_description, to_description};
pub use loader::{load_grid, load_grid_str};
