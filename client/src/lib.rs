mod input_parser;
mod options;
mod output;
mod session;

pub use input_parser::*;
pub use options::*;
pub use output::*;
pub use session::*;
