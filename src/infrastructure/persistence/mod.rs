//! Persistence of bad block lists

mod bad_block_file;

pub use bad_block_file::{default_path, default_path_in, parse, render, BadBlockFile, STDIO_PATH};
