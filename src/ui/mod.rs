pub mod config;
pub mod contact_form;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod enhance;
pub mod navigation;
pub mod pages;

pub use config::{provide_page_config, use_page_config};
pub use contact_form::ContactForm;
pub use navigation::Navbar;
pub use pages::{LandingPage, NotFoundPage};
