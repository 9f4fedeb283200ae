#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # carsort-entities
//!
//! Reusable, agnostic domain entities for sorting cars by distance.
//!
//! The entities only contain generic functionality that does not touch
//! the document or any other browser API.

pub mod car;
pub mod geo;
pub mod home_area;
pub mod template;
