mod article;
mod filter;
mod taxonomy;

pub use article::*;
pub use filter::*;
pub use taxonomy::*;
