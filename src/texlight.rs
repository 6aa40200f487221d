//! Main module for texlight library functionality

pub mod config;
pub mod conversion;
pub mod formats;
pub mod highlight;
pub mod lexing;
pub mod style;
pub mod token;
