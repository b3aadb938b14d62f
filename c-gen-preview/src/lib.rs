//! Bakes still previews of the flight scene through the shared renderer.

pub mod frames;
#[cfg(feature = "generator")]
pub mod raster;

#[cfg(feature = "generator")]
pub fn render_frame(frame: &frames::PreviewFrame) -> image::RgbaImage {
    use cityflight_core::SceneRenderer;

    let [width, height] = frame.size;
    let mut painter = raster::RasterPainter::new(width, height);
    SceneRenderer::new(frame.host.layout()).draw_frame(&mut painter, &frame.state);
    painter.into_image()
}
