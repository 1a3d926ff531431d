//! Browser helpers shared by client components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper isolates one browser API behind a `hydrate` feature gate so the
//! rest of the crate compiles and tests natively.

pub mod audio;
pub mod clock;
pub mod device;
pub mod effect_style;
pub mod navigation;
