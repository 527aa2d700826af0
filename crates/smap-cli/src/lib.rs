//! Library components of the `smap` command line tool.

pub mod logging;
pub mod output;
pub mod view;
