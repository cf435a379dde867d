/*!
# IO utilities

Loading and saving of verse collection documents.
!*/
pub mod reader;
pub mod writer;

pub use reader::load;
pub use writer::{save, save_atomic};
