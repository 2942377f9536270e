pub mod init;
pub mod render;
pub mod tree;

pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use tree::{tree, TreeArgs};
