mod console;
mod errors;
mod menu;


pub use console::Console;
pub use errors::{Error, Result};
