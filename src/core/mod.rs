// src/core/mod.rs

pub mod html;
pub mod net;
pub mod num;
pub mod sanitize;
