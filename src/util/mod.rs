mod result_ext;
pub use result_ext::*;

mod catmull_rom;
pub use catmull_rom::*;
