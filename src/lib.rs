//! Animal facts app core.
//!
//! Categories of facts come from a static JSON feed, are cached on disk,
//! and are presented through a reducer-driven state machine. Rendering is
//! left to whatever front end drives [`runtime::Store`]; the bundled CLI is
//! one such front end.

pub mod cache;
pub mod cli;
pub mod config;
pub mod feed;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod ui;
