pub mod left_nav;
pub mod resize_button;

pub use left_nav::LeftNav;
pub use resize_button::ResizeButton;
