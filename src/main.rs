//! Cybernode - a terminal-green portfolio rendered as a living background.
//!
//! A wave grid, particle sphere and hovering wireframe drift under a star
//! shell while a low drone hums on request.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cybernode::audio::AmbientAudio;
use cybernode::camera::CameraSystem;
use cybernode::cli::{Args, Command, RunArgs};
use cybernode::contact::{ContactForm, EmailJsConfig, EmailJsSender, FormFields, FormState};
use cybernode::content::{self, Portfolio};
use cybernode::error::AppError;
use cybernode::params::*;
use cybernode::rendering::RenderSystem;
use cybernode::scene::{BackgroundScene, FrameClock, SceneParams};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Animated layers and audio
    scene: BackgroundScene,
    camera: CameraSystem,
    audio: AmbientAudio,

    // Configuration
    render_config: RenderConfig,
    fog: FogParams,

    // Time tracking
    clock: FrameClock,

    /// Fatal error raised inside the event loop
    error: Option<AppError>,
}

impl App {
    fn new(run: &RunArgs) -> Self {
        let render_config = run.render_config();
        let seed = run.seed.unwrap_or_else(rand::random);
        log::info!("Scene seed: {}", seed);

        let scene = BackgroundScene::new(SceneParams::default(), seed);
        let camera = CameraSystem::new(CameraParams::default(), render_config.aspect_ratio());

        Self {
            window: None,
            render_system: None,
            scene,
            camera,
            audio: AmbientAudio::new(DroneParams::default()),
            render_config,
            fog: FogParams::default(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn toggle_audio(&mut self) {
        match self.audio.toggle() {
            Ok(true) => println!("Ambient drone: ON"),
            Ok(false) => println!("Ambient drone: OFF"),
            Err(e) => log::error!("Ambient drone unavailable: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("CYBERNODE")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.scene,
            self.render_config.clone(),
            self.fog.clone(),
        ));
        let render_system = match render_system {
            Ok(render_system) => render_system,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let (width, height) = render_system.size();
        self.camera.set_viewport(width, height);
        self.clock = FrameClock::new();

        println!("\nCYBERNODE is running!");
        println!("Press M to toggle the ambient drone, ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyM => self.toggle_audio(),
                _ => {}
            },
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
                self.camera.set_viewport(size.width, size.height);
            }
            WindowEvent::Occluded(hidden) => {
                let result = if hidden {
                    self.audio.suspend()
                } else {
                    self.audio.resume_if_playing()
                };
                if let Err(e) = result {
                    log::warn!("Audio suspend/resume failed: {}", e);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let frame = self.clock.tick();
        self.scene.update(frame);
        render_system.update(&self.scene, self.camera.view_proj());

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn run_window(run: &RunArgs) -> Result<(), AppError> {
    println!("CYBERNODE - procedural portfolio background");
    println!("Initializing systems...\n");

    let mut app = App::new(run);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn print_sections() -> Result<(), AppError> {
    let portfolio = Portfolio::load()?;
    print!("{}", portfolio.outline());
    println!("\n{}", content::current_footer());
    Ok(())
}

/// Returns whether the message was delivered
fn send_contact(name: String, email: String, message: String) -> Result<bool, AppError> {
    let config = EmailJsConfig::from_env()?;
    let sender = EmailJsSender::new(config.endpoint.clone(), config.access_token.clone())?;
    let fields = FormFields::new(name, email, message);
    let mut form = ContactForm::new();

    println!("TRANSMITTING...");
    match form.submit(&sender, &config, &fields)? {
        FormState::Success => {
            println!("TRANSMISSION_SENT");
            println!("We will be in touch shortly.");
            Ok(true)
        }
        FormState::Error(text) => {
            println!("TRANSMISSION_FAILED");
            println!("{}", text);
            Ok(false)
        }
        state => {
            log::warn!("Form settled in unexpected state {:?}", state);
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = match args.command() {
        Command::Run(run) => run_window(&run).map(|()| true),
        Command::Sections => print_sections().map(|()| true),
        Command::Contact {
            name,
            email,
            message,
        } => send_contact(name, email, message),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
