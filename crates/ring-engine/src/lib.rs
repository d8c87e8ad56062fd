//! Ring engine crate.
//!
//! Pure geometry for circular progress rings: a progress angle goes in, a
//! renderer-agnostic [`ring::RingDescriptor`] (arcs, masks, gradients and a
//! leading-edge marker) comes out. Nothing here touches a display API.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod ring;
