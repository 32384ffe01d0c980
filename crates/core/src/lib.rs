pub mod breakpoint;
pub mod error;
pub mod merge;
pub mod naming;
pub mod resolve;
pub mod responsive;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use breakpoint::Breakpoint;
pub use error::ThemeError;
pub use resolve::{resolve_rules, to_prop_value, to_theme_value_if_needed, StyleRule};
pub use responsive::{Responsive, ResponsiveProp};
pub use theme::{default_theme, Scale, Theme, ThemeScale};
pub use types::{Declaration, NamingMode, StyleValue};
