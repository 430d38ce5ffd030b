mod call_to_action;
mod carousel_3d;
mod faqs;
mod features;
mod footer;
mod hero;
mod icons;
mod nav_bar;
mod reviews;

pub use call_to_action::CallToAction;
pub use carousel_3d::Carousel3D;
pub use faqs::Faqs;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{ArrowRight, Chevron, GithubMark, IconSvg, XMark};
pub use nav_bar::NavBar;
pub use reviews::Reviews;
