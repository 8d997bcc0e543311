pub mod error;
pub mod shared_types;
pub mod traits;

pub use did_doc;
