pub mod constants;
pub mod cursor;
pub mod nav;
pub mod snippet;
pub mod theme;
pub mod typing;

pub use cursor::*;
pub use nav::*;
pub use snippet::*;
pub use theme::*;
pub use typing::*;
