mod assets;

pub use assets::*;
