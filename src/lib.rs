pub mod app;
pub mod assets;
pub mod layout;
pub mod menu;
pub mod renderer;
pub mod shell;
pub mod style;
pub mod widgets;
pub mod windowing;

pub use app::{Game, Input, WindowConfig};
pub use layout::{Insets, Rect};
pub use renderer::Renderer;
pub use shell::{GamePhase, Shell};
pub use widgets::{Button, Container, Label, TextInput, Widget};

pub fn init_logging() {
    env_logger::init();
}
