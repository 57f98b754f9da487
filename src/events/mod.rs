mod keyboard;
mod pointer;
mod resize;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;
pub use resize::wire_resize;
