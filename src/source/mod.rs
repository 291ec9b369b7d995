mod code_files;
pub use code_files::*;

mod collector;
pub use collector::*;

mod exclusions;
pub use exclusions::*;

pub mod extensions;
