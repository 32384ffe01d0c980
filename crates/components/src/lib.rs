pub mod boxed;
pub mod button;
pub mod component;
pub mod document;
pub mod flex;
pub mod html;
pub mod pages;
pub mod text;

// Re-export main types
pub use boxed::BoxProps;
pub use button::{ButtonProps, ButtonVariant, PseudoClassProps, PseudoStyle};
pub use component::{Component, Prop};
pub use document::Document;
pub use flex::FlexProps;
pub use pages::home_page;
pub use text::{TextProps, TextVariant};
