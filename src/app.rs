//! The frame host: owns the window and the event loop, and drives a
//! [`Game`] with update/draw callbacks once per frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::renderer::Renderer;
use crate::windowing::events::{EventKind, EventTranslator};

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "gameshow".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Input events gathered since the previous frame, handed to
/// [`Game::update`] as one batch.
#[derive(Default)]
pub struct Input {
    events: Vec<EventKind>,
}

impl Input {
    pub fn push(&mut self, ev: EventKind) {
        self.events.push(ev);
    }

    pub fn events(&self) -> &[EventKind] {
        &self.events
    }

    fn clear(&mut self) {
        self.events.clear();
    }
}

/// The per-frame contract between the host loop and the application.
/// `update` always completes before `draw` within a frame.
pub trait Game {
    fn update(&mut self, input: &Input) -> anyhow::Result<()>;

    fn draw(&mut self, ren: &mut Renderer);

    /// The logical surface size the game wants for an `outer_width` x
    /// `outer_height` window.
    fn preferred_size(&self, outer_width: u32, outer_height: u32) -> (u32, u32);
}

fn frame<G: Game>(game: &mut G, ren: &mut Renderer, input: &mut Input) -> anyhow::Result<()> {
    game.update(input)?;
    input.clear();

    ren.begin_frame();
    game.draw(ren);
    ren.end_frame()
}

/// Open the window, build the game, and run the frame loop until the window
/// closes or the game fails.
pub fn run<G, F>(config: WindowConfig, make_game: F) -> anyhow::Result<()>
where
    G: Game + 'static,
    F: FnOnce(&Renderer) -> anyhow::Result<G>,
{
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut game = make_game(&renderer)?;

    let mut translator = EventTranslator::default();
    let mut input = Input::default();
    let fatal: Rc<RefCell<Option<anyhow::Error>>> = Rc::default();
    let fatal_slot = fatal.clone();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => {
                match &event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => {
                        let (w, h) = game.preferred_size(size.width, size.height);
                        renderer.resize(w, h);
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = frame(&mut game, &mut renderer, &mut input) {
                            *fatal_slot.borrow_mut() = Some(err);
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
                if let Some(ev) = translator.translate(&event) {
                    input.push(ev);
                }
            }
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    })?;

    match fatal.borrow_mut().take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
