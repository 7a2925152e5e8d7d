mod content;
mod error;

pub use content::*;
pub use error::*;
