pub mod demo;
pub mod error;
pub mod format;
pub mod interior;
pub mod iter;
pub mod list;

pub use error::{Error, Result};
pub use interior::Interior;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{List, NOT_FOUND, State};
