//! Pure Rust implementations of UI components.
//!
//! Components render directly to HTML strings. The image component is backed
//! by a small load/fallback state machine in [`img::loader`].

pub mod button;
pub mod dropdown;
pub mod img;
pub mod label;
pub mod size;

#[cfg(feature = "python")]
pub mod python;

pub use button::{Button, ButtonVariant};
pub use dropdown::{Dropdown, DropdownOption, DropdownProps, OptionValue};
pub use img::{ImageLoader, ImageView, Img, ImgProps, LoadState, ObjectFit, Settlement};
pub use label::{FontWeight, Label, LabelVariant};
pub use size::Size;

#[cfg(feature = "python")]
pub use python::register_components;
