pub use crate::app::App;
pub use customcss_types::prelude::*;

// vim: ts=4
