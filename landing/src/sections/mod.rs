// Landing page sections

/// Brand name used across the landing page
pub const BRAND: &str = "Scoutable";

/// Contact inbox shown in the contact block
pub const CONTACT_EMAIL: &str = "info@scoutable.co.uk";

mod common;
mod contact;
mod faq;
mod features;
mod footer;
mod hero;
mod nav;
mod screens;

pub use contact::Contact;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use screens::Screens;
