// File: crates/scatter-render-skia/src/lib.rs
// Summary: Skia raster backend; paints a Scene in layer order to RGBA8 buffers and PNG output.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use scatter_core::scene::Anchor;
use scatter_core::types::{HEIGHT, WIDTH};
use scatter_core::{Color, Mark, MarkClass, Scene, Shape, Theme};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Text marks (tick labels, captions, tooltips); off for deterministic snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH as i32, height: HEIGHT as i32, theme: Theme::light(), draw_labels: true }
    }
}

pub struct SkiaRenderer {
    font: skia::Font,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        let mut font = skia::Font::default();
        font.set_size(12.0);
        Self { font }
    }

    /// Render to a tightly packed RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), scene, opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = info.min_row_bytes();
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), scene, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(to_skia(theme.background));

        let mut skipped = 0usize;
        for mark in scene.paint_order() {
            if !mark.shape.is_finite() {
                skipped += 1;
                continue;
            }
            match &mark.shape {
                Shape::Circle { center, radius } => {
                    let paint = fill(theme.color_for(mark));
                    canvas.draw_circle((center.x, center.y), *radius, &paint);
                }
                Shape::Segment { from, to } => {
                    let paint = stroke(theme.color_for(mark), stroke_width(mark));
                    canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
                }
                Shape::Rect { rect } => {
                    let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                    canvas.draw_rect(r, &fill(theme.color_for(mark)));
                    canvas.draw_rect(r, &stroke(theme.axis_line, 1.0));
                }
                Shape::Text { at, text, anchor } => {
                    if !opts.draw_labels {
                        continue;
                    }
                    let paint = fill(theme.text_color_for(mark));
                    let (width, _) = self.font.measure_str(text, Some(&paint));
                    let x = match anchor {
                        Anchor::Start => at.x,
                        Anchor::Middle => at.x - width * 0.5,
                        Anchor::End => at.x - width,
                    };
                    canvas.draw_str(text, (x, at.y), &self.font, &paint);
                }
            }
        }
        if skipped > 0 {
            debug!(skipped, "skipped marks with undefined geometry");
        }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_width(mark: &Mark) -> f32 {
    match mark.class {
        MarkClass::RegressionLine | MarkClass::Residual => 2.0,
        _ => 1.0,
    }
}
