mod circle;
mod edge;
mod oriented_rect;
mod point;
mod rect;
mod triangle;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use oriented_rect::OrientedRect;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use triangle::Triangle;
