pub mod base;
pub mod button;
pub mod container;
pub mod label;
pub mod text_input;

pub use base::{Widget, WidgetKind};
pub use button::{Button, ButtonConfig, ButtonSkin, ButtonTextColor};
pub use container::{Container, ContainerConfig};
pub use label::{Label, LabelColor, LabelConfig};
pub use text_input::{TextInput, TextInputColor, TextInputConfig, TextInputSkin};
