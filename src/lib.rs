#![doc = include_str!("../README.md")]

pub use crate::error::{DecodeError, Error, ErrorLocation, MissionParsingError, Result, Warning};
pub use crate::parser::{MissionParser, parse_lines, parse_str};
pub use crate::reader::MisReader;
pub use crate::types::*;

mod assemble;
mod error;
mod parser;
mod reader;
pub mod sections;
mod types;
pub mod utils;
