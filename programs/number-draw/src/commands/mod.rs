pub mod draw;
pub mod history;

pub use draw::*;
pub use history::*;
