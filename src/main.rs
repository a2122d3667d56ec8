use std::any::Any;
use std::env;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::info;
use pollster::block_on;
use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use shaderplane::{Axis, Renderer, SharedViewport, Viewer, ViewerEvent};

/// How far one key press moves a camera slider.
const PANEL_STEP: f32 = 0.1;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;

    if options.headless {
        return run_headless(&options);
    }

    match run_interactive(&options) {
        Ok(()) => Ok(()),
        Err(err) => {
            if err.downcast_ref::<WindowInitError>().is_some() {
                eprintln!(
                    "{err}. Falling back to --headless mode (set DISPLAY or install X11 libs to enable rendering)."
                );
                run_headless(&options)
            } else {
                Err(err)
            }
        }
    }
}

fn run_headless(options: &CliOptions) -> Result<()> {
    let frames = if options.frames == 0 {
        60
    } else {
        options.frames
    };
    let mut viewer = Viewer::new(options.width, options.height);
    for _ in 0..frames {
        viewer.handle(ViewerEvent::Tick);
    }
    println!("Ran {frames} frame(s) headless");
    print_final_state(&viewer);
    Ok(())
}

fn run_interactive(options: &CliOptions) -> Result<()> {
    // EventLoop::new panics on hosts without a display; turn that into a
    // typed error so the caller can fall back to headless mode.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let event_loop = panic::catch_unwind(AssertUnwindSafe(EventLoop::new));
    panic::set_hook(default_hook);
    let event_loop =
        event_loop.map_err(|panic| WindowInitError::from_panic("event loop", panic))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("shaderplane")
            .with_inner_size(LogicalSize::new(
                options.width as f64,
                options.height as f64,
            ))
            .build(&event_loop)
            .map_err(|err| WindowInitError::from_error("window", err))?,
    );

    let renderer = block_on(Renderer::new(Arc::clone(&window)))?;
    let size = window.inner_size();
    let viewport = Arc::new(SharedViewport::new(size.width, size.height));
    let viewer = Viewer::new(size.width, size.height);
    info!("viewer started at {}x{}", size.width, size.height);

    let mut app = AppState {
        renderer,
        viewer,
        viewport,
        frames_rendered: 0,
        frame_limit: options.frames,
        last_error: None,
    };

    let mut event_loop = event_loop;
    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        if let Err(err) = app.process_event(&event, control_flow) {
            app.last_error = Some(err);
            control_flow.set_exit();
        }
    });

    app.shutdown();

    if let Some(err) = app.last_error {
        return Err(err);
    }

    Ok(())
}

struct AppState {
    renderer: Renderer,
    viewer: Viewer,
    viewport: Arc<SharedViewport>,
    frames_rendered: u64,
    frame_limit: u64,
    last_error: Option<anyhow::Error>,
}

impl AppState {
    fn process_event(&mut self, event: &Event<()>, control_flow: &mut ControlFlow) -> Result<()> {
        match event {
            Event::WindowEvent { event, window_id } if *window_id == self.renderer.window_id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    WindowEvent::Resized(size) => {
                        self.handle_resize(size.width, size.height);
                    }
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        self.handle_resize(new_inner_size.width, new_inner_size.height);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.viewer.handle(ViewerEvent::PointerMoved {
                            x: position.x as f32,
                            y: position.y as f32,
                        });
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.state == ElementState::Pressed {
                            if let Some(keycode) = input.virtual_keycode {
                                self.handle_key(keycode);
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::RedrawRequested(window_id) if *window_id == self.renderer.window_id() => {
                self.viewer.handle(ViewerEvent::Tick);
                self.renderer
                    .update_uniforms(&self.viewer.camera, &self.viewer.quad);
                if let Err(err) = self.renderer.render(&self.viewer.scene) {
                    match err {
                        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                            let size = self.renderer.window().inner_size();
                            self.renderer.set_size(size);
                        }
                        wgpu::SurfaceError::OutOfMemory => {
                            return Err(anyhow!("GPU is out of memory"));
                        }
                        wgpu::SurfaceError::Timeout => {
                            info!("Surface timeout; retrying next frame");
                        }
                    }
                }
                self.frames_rendered += 1;
                if self.frame_limit > 0 && self.frames_rendered >= self.frame_limit {
                    control_flow.set_exit();
                }
            }
            Event::MainEventsCleared => {
                // Self-perpetuating loop: every drained event batch schedules
                // the next frame.
                self.renderer.window().request_redraw();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        self.viewport.update(width, height);
        self.renderer
            .set_size(winit::dpi::PhysicalSize::new(width, height));
        self.viewer.handle(ViewerEvent::Resized { width, height });
    }

    // Keyboard stand-in for the slider widgets: arrows drive x/y, page keys
    // drive z, all through the panel's clamped bindings.
    fn handle_key(&mut self, keycode: VirtualKeyCode) {
        let panel = self.viewer.panel.clone();
        let camera = &mut self.viewer.camera;
        match keycode {
            VirtualKeyCode::Left => panel.nudge(camera, Axis::X, -PANEL_STEP),
            VirtualKeyCode::Right => panel.nudge(camera, Axis::X, PANEL_STEP),
            VirtualKeyCode::Up => panel.nudge(camera, Axis::Y, PANEL_STEP),
            VirtualKeyCode::Down => panel.nudge(camera, Axis::Y, -PANEL_STEP),
            VirtualKeyCode::PageUp => panel.nudge(camera, Axis::Z, PANEL_STEP),
            VirtualKeyCode::PageDown => panel.nudge(camera, Axis::Z, -PANEL_STEP),
            _ => return,
        };
    }

    fn shutdown(&mut self) {
        let viewport = self.viewport.get();
        info!(
            "viewer stopped at {}x{} after {} frame(s)",
            viewport.width, viewport.height, self.frames_rendered
        );
        print_final_state(&self.viewer);
    }
}

fn print_final_state(viewer: &Viewer) {
    println!("Final viewer state:");
    println!(" - time={:.2}", viewer.quad.time());
    println!(
        " - mesh=({:.2}, {:.2})",
        viewer.quad.position.x, viewer.quad.position.y
    );
    println!(
        " - camera=({:.2}, {:.2}, {:.2})",
        viewer.camera.position.x, viewer.camera.position.y, viewer.camera.position.z
    );
}

#[derive(Debug, Error)]
#[error("failed to initialize {stage}: {message}")]
struct WindowInitError {
    stage: &'static str,
    message: String,
}

impl WindowInitError {
    fn from_panic(stage: &'static str, panic: Box<dyn Any + Send>) -> Self {
        Self {
            stage,
            message: panic_message(panic),
        }
    }

    fn from_error(stage: &'static str, err: impl std::fmt::Display) -> Self {
        Self {
            stage,
            message: err.to_string(),
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    match panic.downcast::<String>() {
        Ok(msg) => *msg,
        Err(panic) => match panic.downcast::<&'static str>() {
            Ok(msg) => (*msg).to_string(),
            Err(_) => "unknown panic".into(),
        },
    }
}

struct CliOptions {
    width: u32,
    height: u32,
    frames: u64,
    headless: bool,
}

impl CliOptions {
    fn parse() -> Result<Self> {
        let mut options = Self {
            width: 1280,
            height: 720,
            frames: 0,
            headless: false,
        };
        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => options.width = parse_value(&mut args, "--width")?,
                "--height" => options.height = parse_value(&mut args, "--height")?,
                "--frames" => options.frames = parse_value(&mut args, "--frames")?,
                "--headless" => options.headless = true,
                other => {
                    return Err(anyhow!(
                        "Unknown argument: {other}. Usage: shaderplane [--width N] [--height N] [--frames N] [--headless]"
                    ));
                }
            }
        }
        Ok(options)
    }
}

fn parse_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?;
    value
        .parse()
        .with_context(|| format!("invalid value for {flag}"))
}
