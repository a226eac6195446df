//! termfolio - a portfolio terminal.
//!
//! A tiny shell (`help`, `pwd`, `ls`, `cd`, `cat`, `clear`) over a fixed,
//! read-only virtual filesystem. File contents are streamed line by line at a
//! fixed pace; everything else appears instantly.
//!
//! ```no_run
//! use std::sync::Arc;
//! use termfolio::config::ShellConfig;
//! use termfolio::core::{Shell, VirtualFs};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ShellConfig::default();
//! let mut shell = Shell::new(Arc::new(VirtualFs::builtin()?), config.line_delay());
//! shell.submit("cd about");
//! shell.submit("cat about.txt");
//! shell.run_stream(|step| println!("{:?}", step)).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;
