//! Wrap module: Budget-constrained line wrapping.
//!
//! This module contains:
//! - [`wrap`]: Split text into width-respecting fragments using an adaptive
//!   measurement probe.
//! - [`Fragments`]: The lazy iterator [`wrap`] returns.

mod fragments;

pub use fragments::{wrap, Fragments};
