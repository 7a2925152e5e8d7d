mod notch;
mod wipe;
mod workly;

pub use notch::NotchPage;
pub use wipe::WipePage;
pub use workly::WorklyPage;
