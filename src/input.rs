pub mod loader;

pub use loader::{load_file, load_stdin};
