#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod core;
pub mod fmt;
pub mod prelude;
pub mod quantity;
pub mod request;
pub mod tables;
