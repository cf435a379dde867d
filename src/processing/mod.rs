/*! Dataset processing

Offline batch operations on verse collections: growing a canonical collection ([append]),
and converting collections to the app format ([convert]).
!*/
pub mod append;
pub mod convert;

pub use append::{append_files, AppendOptions, AppendReport};
pub use convert::{convert_files, load_range, RangeSource, RecitationSource};
