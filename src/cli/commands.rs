//! Commands available on the command line.

pub mod run;
