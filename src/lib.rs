pub mod util;

mod engine;
pub use engine::*;

mod geom;
pub use geom::*;
