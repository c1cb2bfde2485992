//! Drawer animation system built on `iced_anim`
//!
//! The drawer-open progress is a single transition in [0, 1]; the header's
//! offset and fade are pure piecewise-linear mappings of that progress.

mod drawer;

pub use drawer::{DrawerAnimation, header_offset, header_opacity};
