pub mod board;
pub mod drawing;
pub mod library;
pub mod primitives;
pub mod schematic;

pub use board::*;
pub use drawing::*;
pub use library::*;
pub use primitives::*;
pub use schematic::*;
