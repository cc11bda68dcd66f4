// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: paints a shadow-chart Scene into RGBA8 or PNG bytes.

use std::path::Path as FsPath;

use log::debug;
use shadow_chart::path::PathCommand;
use shadow_chart::scene::{LinearGradient, Stroke, TextAnchor};
use shadow_chart::{Color, Fill, Scene, Shape};
use skia_safe as skia;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("reading back pixels failed")]
    ReadPixels,
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// RGBA8 pixels (unpremultiplied), row-major.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

/// Paints scenes onto a CPU raster surface sized to the scene's viewport.
#[derive(Clone, Copy, Debug)]
pub struct SkiaRenderer {
    background: Color,
}

impl SkiaRenderer {
    pub fn new(background: Color) -> Self { Self { background } }

    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<RgbaImage> {
        let mut surface = self.paint(scene)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RasterError::ReadPixels);
        }
        Ok(RgbaImage { pixels, width: w as u32, height: h as u32, stride })
    }

    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.paint(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RasterError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<FsPath>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    fn paint(&self, scene: &Scene) -> Result<skia::Surface> {
        let vp = scene.viewport();
        // a zero-area scene still yields a 1x1 background pixel
        let (w, h) = ((vp.width.ceil() as i32).max(1), (vp.height.ceil() as i32).max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(RasterError::Surface(w, h))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(self.background));

        for node in scene.nodes().iter().filter(|n| n.visible) {
            match &node.shape {
                Shape::Line { from, to, stroke } => {
                    canvas.draw_line(pt(from.x, from.y), pt(to.x, to.y), &stroke_paint(stroke));
                }
                Shape::Text { at, text, size, color, anchor, rotation } => {
                    draw_text(canvas, text, pt(at.x, at.y), *size as f32, *color, *anchor, *rotation as f32);
                }
                Shape::Path { path, fill, stroke } => {
                    let sk = to_skia_path(path.commands());
                    if let Some(paint) = fill_paint(fill, scene.gradients(), *sk.bounds()) {
                        canvas.draw_path(&sk, &paint);
                    }
                    if let Some(stroke) = stroke {
                        canvas.draw_path(&sk, &stroke_paint(stroke));
                    }
                }
                Shape::Rect { rect, fill, stroke, radius } => {
                    let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                    let rad = *radius as f32;
                    if let Some(paint) = fill_paint(fill, scene.gradients(), r) {
                        canvas.draw_round_rect(r, rad, rad, &paint);
                    }
                    if let Some(stroke) = stroke {
                        canvas.draw_round_rect(r, rad, rad, &stroke_paint(stroke));
                    }
                }
                Shape::Circle { center, radius, fill, stroke } => {
                    let c = pt(center.x, center.y);
                    let r = *radius as f32;
                    let bounds = skia::Rect::from_ltrb(c.x - r, c.y - r, c.x + r, c.y + r);
                    if let Some(paint) = fill_paint(fill, scene.gradients(), bounds) {
                        canvas.draw_circle(c, r, &paint);
                    }
                    if let Some(stroke) = stroke {
                        canvas.draw_circle(c, r, &stroke_paint(stroke));
                    }
                }
            }
        }
        Ok(surface)
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(shadow_chart::Theme::default().surface) }
}

// ---- helpers ----------------------------------------------------------------

fn pt(x: f64, y: f64) -> skia::Point { skia::Point::new(x as f32, y as f32) }

fn to_skia(c: Color) -> skia::Color { skia::Color::from_argb(c.a, c.r, c.g, c.b) }

fn to_skia_path(commands: &[PathCommand]) -> skia::Path {
    let mut path = skia::Path::new();
    for c in commands {
        match *c {
            PathCommand::MoveTo(p) => { path.move_to(pt(p.x, p.y)); }
            PathCommand::LineTo(p) => { path.line_to(pt(p.x, p.y)); }
            PathCommand::CubicTo { c1, c2, to } => {
                path.cubic_to(pt(c1.x, c1.y), pt(c2.x, c2.y), pt(to.x, to.y));
            }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia(stroke.color));
    paint
}

/// Fill paint, or `None` when nothing should be filled. A gradient id with no
/// definition in the scene is skipped.
fn fill_paint(fill: &Fill, gradients: &[LinearGradient], bounds: skia::Rect) -> Option<skia::Paint> {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    match fill {
        Fill::None => return None,
        Fill::Solid(c) => {
            paint.set_color(to_skia(*c));
        }
        Fill::Gradient(id) => {
            let g = gradients.iter().find(|g| &g.id == id)?;
            let colors: Vec<skia::Color> = g
                .stops
                .iter()
                .map(|s| to_skia(g.color.with_alpha((s.opacity * 255.0).round().clamp(0.0, 255.0) as u8)))
                .collect();
            let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset as f32).collect();
            let shader = skia::Shader::linear_gradient(
                ((bounds.left, bounds.top), (bounds.left, bounds.bottom)),
                colors.as_slice(),
                offsets.as_slice(),
                skia::TileMode::Clamp,
                None,
                None,
            )?;
            paint.set_shader(shader);
        }
    }
    Some(paint)
}

fn draw_text(
    canvas: &skia::Canvas,
    text: &str,
    at: skia::Point,
    size: f32,
    color: Color,
    anchor: TextAnchor,
    rotation: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(to_skia(color));
    let mut font = skia::Font::default();
    font.set_size(size);
    let (advance, _) = font.measure_str(text, Some(&paint));
    let dx = match anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => -advance / 2.0,
        TextAnchor::End => -advance,
    };
    canvas.save();
    if rotation != 0.0 {
        canvas.rotate(rotation, Some(at));
    }
    canvas.draw_str(text, (at.x + dx, at.y), &font, &paint);
    canvas.restore();
}
