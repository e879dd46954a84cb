#![no_std]

//! mmseq-core - definitions for windowed memory-mapped sequences
//!
//! This crate provides the pure, I/O-free half of the mmseq workspace:
//! access modes, window-layout arithmetic with its validation rules,
//! and the element type constraint. The mapping implementation lives
//! in the `mmseq` crate.

pub mod element;
pub mod error;
pub mod layout;
pub mod mode;

pub use element::Element;
pub use error::LayoutError;
pub use layout::{
    rebase, validate_lead, validate_region, validate_window_len, window_delta, WindowLayout,
};
pub use mode::Mode;
