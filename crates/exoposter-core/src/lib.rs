//! Exoposter Core Types
//!
//! This crate provides the drawing model shared by the exoposter crates:
//!
//! - **Scene**: the immutable scene graph of canvases, collections and
//!   drawables ([`scene`] module)
//! - **Layout**: resolution of relative coordinates into page millimeters
//!   ([`layout`] module)
//! - **Layers**: z-ordered collection of rendered SVG nodes ([`layer`] module)
//! - **Colors**: CSS color parsing and palettes ([`color`] module)

pub mod color;
pub mod layer;
pub mod layout;
pub mod scene;
