/// Rendering helpers.
///
/// This module turns token sequences and other displayable items into the
/// space-separated text the public entry points return, e.g. `A B + C *`.
pub mod render;
