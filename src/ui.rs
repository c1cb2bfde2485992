//! UI module for the drawer navigation shell
//! Material-style light surfaces with a purple accent
//!
//! # Architecture
//!
//! - **Components** (`components`): Drawer panel, user header, route table
//! - **Effects** (`effects`): WGPU shader backdrop behind the drawer
//! - **Pages** (`pages`): Full-page views routed by the drawer

pub mod animation;
pub mod components;
pub mod effects;
pub mod icons;
pub mod pages;
pub mod theme;
