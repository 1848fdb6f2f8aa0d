//! Built-in animation scripts used by the landing page.

mod cover;

pub use cover::cover;
