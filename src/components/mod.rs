mod cursor;
mod faq;
mod feature_animation;
mod footer;
mod nav;
mod particle_canvas;
mod reveal_block;
mod tilt_card;
mod wipe_section;

pub use cursor::{CoolCursor, HOVERABLE_CLASS};
pub use faq::FaqList;
pub use feature_animation::FeatureAnimation;
pub use footer::{copyright, current_year, Copyright};
pub use nav::{MenuHandle, MenuOverlay, NavAnchor, NavContext, SiteHeader};
pub use particle_canvas::ParticleCanvas;
pub use reveal_block::RevealSection;
pub use tilt_card::TiltPlanCard;
pub use wipe_section::{StaggeredTitle, WipeSection};
