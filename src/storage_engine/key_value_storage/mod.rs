mod children;
mod degree;
mod item;
mod memory;
mod node;
mod status;
mod store;
mod tree;

pub use degree::*;
pub use item::*;
pub use memory::*;
pub use node::*;
pub use status::*;
pub use store::*;
pub use tree::*;
