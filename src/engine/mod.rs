mod path;
pub use path::*;

mod drawer;
pub use drawer::*;
