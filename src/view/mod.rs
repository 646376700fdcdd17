pub mod block;
pub mod ids;
pub mod node;
pub mod page;
pub mod table;
pub mod toggle;
pub mod url;
