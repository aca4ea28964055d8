// File: crates/scatter-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic scatter with line and residuals to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips only the golden comparison.
// - Always checks the render is deterministic and decodes to the requested size.

use scatter_core::{ChartView, Insets, Point, RegressionLine, Theme};
use scatter_render_skia::{RenderOptions, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let decoded = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    assert_eq!(decoded.dimensions(), (400, 300));
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(decoded.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(theme: Theme) -> Vec<u8> {
    let points = vec![
        Point::new(20.0, 40.0),
        Point::new(80.0, 60.0),
        Point::new(140.0, 150.0),
        Point::new(220.0, 130.0),
        Point::new(300.0, 210.0),
    ];
    let mut view = ChartView::new(400, 300, Insets::default());
    view.draw_axes();
    view.render(&points);
    view.draw_residuals(&points, &RegressionLine::fit(&points));

    let opts = RenderOptions { width: 400, height: 300, theme, draw_labels: false };
    SkiaRenderer::new().render_to_png_bytes(view.surface(), &opts).expect("render bytes")
}

fn rgba(bytes: &[u8]) -> Vec<u8> {
    image::load_from_memory(bytes).expect("decode").to_rgba8().into_raw()
}

#[test]
fn golden_light_scatter() {
    let bytes = render_bytes(Theme::light());
    assert_eq!(rgba(&bytes), rgba(&render_bytes(Theme::light())), "render is not deterministic");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/scatter_light.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_dark_scatter() {
    let bytes = render_bytes(Theme::dark());
    assert_eq!(rgba(&bytes), rgba(&render_bytes(Theme::dark())), "render is not deterministic");
    assert_ne!(rgba(&bytes), rgba(&render_bytes(Theme::light())), "themes render identically");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/scatter_dark.png");
    write_or_compare(&path, &bytes);
}
