//! Page behavior independent of the browser: state machines, descriptors and
//! the numeric models the `ui` layer drives.

pub mod anchors;
pub mod capabilities;
pub mod config;
pub mod contact;
pub mod lifecycle;
pub mod motion;
pub mod navigation;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod trigger;
