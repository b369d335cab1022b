use winit::event::ElementState;
use winit::event::MouseButton;
use winit::event::WindowEvent;
use winit::event_loop::ControlFlow;
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::keyboard::PhysicalKey;
use winit::window::WindowBuilder;

use crate::math::IVector2;
use crate::Input;
use crate::Result;

/// # Application
///
/// Entry-point for a frame-driven game. The host loop feeds window events to the application and
/// its [Input], then calls [Application::update] once per frame.
pub trait Application: Sized {
    /// Returns the title to be displayed in the application window.
    fn title(&self) -> &str;

    /// Returns the current state of the application. The application will exit if this returns
    /// [ApplicationState::Finished] after [Application::handle_event] or [Application::update] is
    /// called.
    fn state(&self) -> ApplicationState;

    /// Handles the incoming event. [Input] has already been updated with it.
    fn handle_event(&mut self, event: Event);

    /// Updates the application for the current frame.
    fn update(&mut self, input: &Input);

    /// Runs the application until it finishes or the window is closed.
    fn run(self) -> Result<()> {
        run_application(self)
    }
}

/// # Application State
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ApplicationState {
    /// Application is running.
    Running,
    /// Application has finished running.
    Finished,
}

/// # Event
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// Application window requested to close.
    CloseRequested,
    /// A key was pressed. Repeats while held are not reported.
    KeyPressed(KeyCode),
    /// A key was released.
    KeyReleased(KeyCode),
    /// The cursor moved to the given window pixel.
    MouseMoved(IVector2),
    /// A mouse button was pressed.
    MousePressed(MouseButton),
    /// A mouse button was released.
    MouseReleased(MouseButton),
}

fn translate_event(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(Event::CloseRequested),
        WindowEvent::KeyboardInput { event, .. } => match (event.physical_key, event.state) {
            (PhysicalKey::Code(key), ElementState::Pressed) if !event.repeat => {
                Some(Event::KeyPressed(key))
            }
            (PhysicalKey::Code(key), ElementState::Released) => Some(Event::KeyReleased(key)),
            _ => None,
        },
        WindowEvent::CursorMoved { position, .. } => Some(Event::MouseMoved(IVector2::new(
            position.x.round() as i32,
            position.y.round() as i32,
        ))),
        WindowEvent::MouseInput { state, button, .. } => Some(match state {
            ElementState::Pressed => Event::MousePressed(*button),
            ElementState::Released => Event::MouseReleased(*button),
        }),
        _ => None,
    }
}

fn run_application(mut app: impl Application) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut window_title = app.title().to_string();
    let window = WindowBuilder::new()
        .with_title(&window_title)
        .build(&event_loop)?;
    let mut input = Input::new();

    log::info!("starting application \"{window_title}\"");

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(|event, event_loop_window_target| {
        match event {
            winit::event::Event::WindowEvent { event, .. } => {
                if let Some(event) = translate_event(&event) {
                    input.handle_event(event);
                    app.handle_event(event);
                }
            }
            winit::event::Event::AboutToWait => {
                app.update(&input);

                let title = app.title();
                if title != window_title {
                    window_title = title.to_string();
                    window.set_title(&window_title);
                }
            }
            _ => {}
        }

        if app.state() == ApplicationState::Finished {
            log::info!("application finished");
            event_loop_window_target.exit();
        }
    })?;

    Ok(())
}
