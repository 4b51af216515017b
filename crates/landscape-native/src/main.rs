use instant::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::WindowBuilder;

use landscape_core::input::{command_for_key, key_legend};
use landscape_core::{
    Command, LandscapeError, LandscapePipeline, PipelineParams, RenderRequest, Session,
    WINDOW_SIZE, WINDOW_TITLE,
};

mod gpu;
mod input;

use gpu::GpuState;
use input::{key_name, MouseState};

/// Shell-side glue: owns the session and coalesces render requests into redraws.
struct App {
    session: Session,
    mouse: MouseState,
    pending: Option<RenderRequest>,
    last: RenderRequest,
}

impl App {
    fn new(pipeline: LandscapePipeline) -> Self {
        Self {
            session: Session::new(pipeline),
            mouse: MouseState::default(),
            pending: None,
            last: RenderRequest::SETTLED,
        }
    }

    /// The latest request wins; several events in one loop turn draw once.
    fn queue(&mut self, gpu: &GpuState, request: Option<RenderRequest>) {
        if let Some(r) = request {
            self.pending = Some(r);
            gpu.window().request_redraw();
        }
    }

    fn current_quality(&self) -> RenderRequest {
        if self.session.is_dragging() || self.session.is_auto_rotating() {
            RenderRequest::INTERACTIVE
        } else {
            RenderRequest::SETTLED
        }
    }

    fn on_key(&mut self, gpu: &GpuState, key: &str, repeat: bool) {
        let Some(command) = command_for_key(key) else {
            return;
        };
        // Holding a key only repeats camera nudges, never counter clicks.
        if repeat && !matches!(command, Command::NudgeCamera { .. }) {
            return;
        }
        match self.session.handle(command, Instant::now()) {
            Ok(request) => self.queue(gpu, request),
            Err(e) => log::error!("[keys] {e}"),
        }
    }

    fn redraw(&mut self, gpu: &mut GpuState, elwt: &EventLoopWindowTarget<()>) {
        let request = self.pending.take().unwrap_or(self.last);
        self.last = request;
        match self.session.render(request, gpu) {
            Ok(()) => {}
            Err(LandscapeError::Render(e))
                if matches!(
                    e.downcast_ref::<wgpu::SurfaceError>(),
                    Some(wgpu::SurfaceError::OutOfMemory)
                ) =>
            {
                log::error!("[gpu] out of memory, exiting");
                elwt.exit();
            }
            Err(e) => log::warn!("[gpu] frame failed: {e}"),
        }
    }

    fn on_event(
        &mut self,
        event: Event<()>,
        elwt: &EventLoopWindowTarget<()>,
        gpu: &mut GpuState,
    ) {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    gpu.resize(size);
                    let quality = self.current_quality();
                    self.queue(gpu, Some(quality));
                }
                WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                    match key_name(&event.logical_key) {
                        Some("Escape") => elwt.exit(),
                        Some(key) => self.on_key(gpu, key, event.repeat),
                        None => {}
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => {
                        self.mouse.press();
                        self.session.begin_drag();
                    }
                    ElementState::Released => {
                        self.mouse.release();
                        let request = self.session.end_drag();
                        self.queue(gpu, request);
                    }
                },
                WindowEvent::CursorMoved { position, .. } => {
                    if let Some((dx, dy)) = self.mouse.move_to(position.x, position.y) {
                        let request = self.session.drag(dx, dy);
                        self.queue(gpu, request);
                    }
                }
                WindowEvent::RedrawRequested => self.redraw(gpu, elwt),
                _ => {}
            },
            Event::AboutToWait => {
                let request = self.session.tick(Instant::now());
                self.queue(gpu, request);
                elwt.set_control_flow(match self.session.next_deadline() {
                    Some(deadline) => ControlFlow::WaitUntil(deadline),
                    None => ControlFlow::Wait,
                });
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let pipeline = LandscapePipeline::new(PipelineParams::default())?;
    let mut app = App::new(pipeline);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_SIZE[0], WINDOW_SIZE[1]))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    log::info!(
        "[keys] 1-5: theme, space: auto-rotate, tab: background, backspace: reset, arrows: camera, enter: tally"
    );
    log::info!("[keys] {}", key_legend().join(", "));
    app.queue(&gpu, Some(RenderRequest::SETTLED));

    event_loop.run(move |event, elwt| app.on_event(event, elwt, &mut gpu))?;
    Ok(())
}
