// File: crates/scatter-window/src/main.rs
// Summary: Interactive scatter window; renders the chart scene via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use scatter_core::{theme, Action, ChartView, Config, InputController, Insets, PointStore, Pos, Theme, Toolbar};
use scatter_render_skia::{RenderOptions, SkiaRenderer};

#[derive(Debug, Parser)]
#[command(name = "scatter-window", about = "Click to add points; fit and draw the regression line")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for the initial points
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };
    if let Some(t) = &args.theme { cfg.theme = t.clone(); }

    let mut store = PointStore::new();
    let seeded = match args.seed {
        Some(seed) => store.seed_random_with(&mut StdRng::seed_from_u64(seed), cfg.seed_count, cfg.seed_min, cfg.seed_max),
        None => store.seed_random_between(cfg.seed_count, cfg.seed_min, cfg.seed_max),
    };
    seeded.context("failed to seed points")?;

    // keep room above the plot for the toolbar
    let insets = Insets { top: cfg.insets.top.max(Insets::with_toolbar().top), ..cfg.insets };
    let toolbar = Toolbar::for_insets(&insets);
    let controller = InputController::with_toolbar(toolbar.clone());
    let mut view = ChartView::new(cfg.width, cfg.height, insets).with_style(cfg.view_style());
    view.draw_toolbar(&toolbar);
    view.refresh(store.points());

    let renderer = SkiaRenderer::new();
    let palette = theme::find(&cfg.theme);
    info!(theme = palette.name, points = store.len(), "starting window");

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scatter Regression Explorer")
        .with_inner_size(winit::dpi::PhysicalSize::new(cfg.width, cfg.height))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut cursor: Option<Pos> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    view.resize(new_size.width.max(1), new_size.height.max(1), store.points());
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let at = Pos::new(position.x as f32, position.y as f32);
                    cursor = Some(at);
                    controller.pointer_move(&mut view, at);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    controller.pointer_leave(&mut view);
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some(at) = cursor {
                        let outcome = controller.pointer_down(&mut store, &mut view, at);
                        debug!(?outcome, "pointer down");
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if let Some(action) = key_action(key) {
                        controller.apply(action, &mut store, &mut view);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&renderer, &view, &palette, &mut surface) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

fn key_action(key: VirtualKeyCode) -> Option<Action> {
    let c = match key {
        VirtualKeyCode::C => 'c',
        VirtualKeyCode::L => 'l',
        VirtualKeyCode::K => 'k',
        VirtualKeyCode::R => 'r',
        _ => return None,
    };
    Action::from_key(c)
}

/// Render the scene and blit it as 0RGB u32 pixels.
fn present(renderer: &SkiaRenderer, view: &ChartView, theme: &Theme, surface: &mut softbuffer::Surface) -> Result<()> {
    let (w, h) = (view.width().max(1), view.height().max(1));
    let (nw, nh) = (NonZeroU32::new(w).context("zero width")?, NonZeroU32::new(h).context("zero height")?);
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;

    let opts = RenderOptions { width: w as i32, height: h as i32, theme: *theme, draw_labels: true };
    let (rgba, _, _, _) = renderer.render_to_rgba8(view.surface(), &opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
