pub mod input;
pub mod process;
pub mod show_config;
pub mod validate;

pub use input::*;
pub use process::*;
pub use show_config::*;
pub use validate::*;
