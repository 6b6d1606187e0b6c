pub use customcss_core::prelude::*;

// vim: ts=4
