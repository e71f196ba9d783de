pub mod args;
pub mod util;
