pub mod finding;
pub mod scan;
pub mod summary;

pub use finding::*;
pub use scan::*;
pub use summary::*;
