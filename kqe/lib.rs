#![allow(async_fn_in_trait)]

#[macro_use]
mod errors;

pub use errors::{CheckError, CheckResult};
pub use session::Session;

pub mod filters;
pub mod pages;
pub mod reconcile;
pub mod routing;
pub mod sorting;
pub mod text_diff;
pub mod ui;

mod session;

#[cfg(test)]
pub mod testing;
