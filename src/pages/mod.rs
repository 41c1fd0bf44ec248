//! Page components for HSC Study.

mod home;
mod section;

pub use home::HomePage;
pub use section::SectionPage;
