//! Window lifecycle and per-frame presentation.

use std::sync::Arc;

use kurbo::Point;
use panekit_core::{FrameDriver, PointerEvent, PointerState, Theme, Widget};
use panekit_render::{RenderResult, RendererError, VelloSurface};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::demo::{self, DemoState};
use crate::error::{AppError, AppResult};

/// Runtime state, created once the window exists.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    /// Blits the Rgba8Unorm render target onto the (possibly BGRA) swapchain.
    texture_blitter: vello::wgpu::util::TextureBlitter,
    ui_surface: VelloSurface,

    // UI
    driver: FrameDriver,
    pointer: PointerState,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    theme: Theme,
    /// Widget tree waiting for the window; moved into the driver on resume.
    root: Option<Widget>,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// First fatal error, reported when the event loop returns.
    error: Option<AppError>,
}

/// Build the demo tree and run it until the window closes.
pub fn run(config: AppConfig) -> AppResult<()> {
    let theme = config.load_theme()?;
    let root = demo::build(&DemoState::default())?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, theme, root);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

impl App {
    /// Create an application that will show `root`.
    pub fn new(config: AppConfig, theme: Theme, root: impl Into<Widget>) -> Self {
        Self {
            config,
            theme,
            root: Some(root.into()),
            state: None,
            render_cx: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<()> {
        let Some(root) = self.root.take() else {
            return Ok(());
        };

        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::InitFailed(format!("surface: {e}")))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("vello: {e}")))?;
        let texture_blitter =
            vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let mut ui_surface = VelloSurface::new(width as f64, height as f64);
        ui_surface.set_clear_color(self.theme.background);

        self.state = Some(AppState {
            window,
            surface,
            vello_renderer,
            texture_blitter,
            ui_surface,
            driver: FrameDriver::new(root, self.theme.clone()),
            pointer: PointerState::new(),
        });
        log::info!("Renderer ready");
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{error}");
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

impl AppState {
    /// Run one UI tick and present it.
    fn redraw(&mut self, render_cx: &RenderContext) -> RenderResult<()> {
        let report = self.driver.tick(&mut self.ui_surface, &mut self.pointer);
        if report.clicks > 0 || report.changes > 0 {
            log::debug!("Frame {}: {:?}", report.tick, report);
        }
        let scene = self.ui_surface.take_scene();

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let width = self.surface.config.width;
        let height = self.surface.config.height;
        let params = RenderParams {
            base_color: self.driver.theme().background,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a StorageBinding target, which is
        // only guaranteed for Rgba8Unorm.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());
        let mut blit_encoder =
            device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("blit encoder"),
            });
        self.texture_blitter
            .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(blit_encoder.finish()));

        surface_texture.present();
        Ok(())
    }

    fn resize(&mut self, render_cx: &mut RenderContext, width: u32, height: u32) {
        render_cx.resize_surface(&mut self.surface, width, height);
        if let Err(e) = self.ui_surface.resize(width as f64, height as f64) {
            log::warn!("Resize ignored: {e}");
        }
        self.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(state), Some(render_cx)) = (self.state.as_mut(), self.render_cx.as_mut()) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested after {} frames", state.driver.ticks());
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                state.resize(render_cx, size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.pointer.handle_pointer_event(PointerEvent::Move {
                    position: Point::new(position.x, position.y),
                });
            }

            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let position = state.pointer.position();
                let event = match button_state {
                    ElementState::Pressed => PointerEvent::Down { position },
                    ElementState::Released => PointerEvent::Up { position },
                };
                state.pointer.handle_pointer_event(event);
            }

            WindowEvent::RedrawRequested => {
                match state.redraw(render_cx) {
                    Ok(()) => {}
                    // Lost or outdated swapchain: reconfigure and try next frame.
                    Err(RendererError::Surface(e)) => {
                        log::warn!("Failed to get surface texture: {e}");
                        let (width, height) = (state.surface.config.width, state.surface.config.height);
                        state.resize(render_cx, width, height);
                        return;
                    }
                    Err(e) => {
                        let error = AppError::Renderer(e);
                        self.fail(event_loop, error);
                        return;
                    }
                }
                state.window.request_redraw();
            }

            _ => {}
        }
    }
}
