mod mapping;
pub mod resolver;
pub mod schema;
pub mod traits;

pub use did_resolver;
pub use resolver::DidCommDidResolver;
pub use traits::DidCommResolver;
