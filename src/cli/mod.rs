mod app;
mod args;
mod shell;

pub use app::*;
pub use args::*;
pub use shell::*;
