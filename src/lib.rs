#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod validation;
pub mod model;
pub mod parser;
pub mod db;
pub mod ops;
pub mod migrate;
pub mod logging;
pub mod cli;
