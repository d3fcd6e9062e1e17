/// Rendering a [`CSpace`](crate::cspace::CSpace) to SVG for debugging
pub mod svg_export;
