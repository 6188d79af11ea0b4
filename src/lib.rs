//! One-click prompt enhancement: the client request lifecycle and the
//! enhancement service it talks to.

pub mod banner;
pub mod commands;
pub mod consts;
pub mod controller;
pub mod enhancer;
pub mod service;
pub mod spinner;
pub mod surface;
