//! Shared behavior crate for Softlight. Pure engines live here and compile on
//! every target; the DOM glue is wasm32-only.

pub mod core;
pub mod fade;
pub mod nav;
pub mod reveal;

#[cfg(target_arch = "wasm32")]
pub mod boot;

pub use crate::core::config::PageConfig;
pub use crate::fade::FadeOptions;
pub use crate::nav::NavOptions;
pub use crate::reveal::RevealOptions;
