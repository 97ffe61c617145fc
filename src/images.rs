//! Poster and backdrop loading.
//!
//! Images are looked up under a covers source: a local directory or an
//! `http(s)://` base URL. Each image is fetched and decoded on a background
//! thread; the result comes back over a channel and is turned into a texture
//! on the UI thread. A failed image becomes a placeholder for good.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use eframe::egui;
use thiserror::Error;
use tracing::debug;

use crate::render::ImageKind;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Where covers live
#[derive(Debug, Clone, PartialEq)]
pub enum CoversSource {
    Directory(PathBuf),
    Remote(String),
}

impl CoversSource {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with("http://") || input.starts_with("https://") {
            CoversSource::Remote(input.trim_end_matches('/').to_string())
        } else if input.is_empty() {
            CoversSource::Directory(PathBuf::from("covers"))
        } else {
            CoversSource::Directory(PathBuf::from(input))
        }
    }

    /// Path or URL of one image
    pub fn locate(&self, id: &str, kind: ImageKind) -> String {
        let file_name = kind.file_name(id);
        match self {
            CoversSource::Directory(dir) => dir.join(file_name).display().to_string(),
            CoversSource::Remote(base) => format!("{}/{}", base, file_name),
        }
    }

    fn fetch(&self, id: &str, kind: ImageKind) -> Result<Vec<u8>, ImageError> {
        let location = self.locate(id, kind);
        match self {
            CoversSource::Directory(_) => Ok(fs::read(location)?),
            CoversSource::Remote(_) => {
                let agent = ureq::Agent::config_builder()
                    .timeout_global(Some(Duration::from_secs(30)))
                    .build()
                    .new_agent();

                let mut response = agent
                    .get(&location)
                    .call()
                    .map_err(|e| ImageError::Http(e.to_string()))?;

                if response.status() != 200 {
                    return Err(ImageError::Http(format!("status {}", response.status())));
                }

                response
                    .body_mut()
                    .read_to_vec()
                    .map_err(|e| ImageError::Http(e.to_string()))
            }
        }
    }
}

/// Decoded RGBA pixels, ready for upload
#[derive(Debug)]
pub struct DecodedImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

pub fn load_image(source: &CoversSource, id: &str, kind: ImageKind) -> Result<DecodedImage, ImageError> {
    let bytes = source.fetch(id, kind)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    Ok(DecodedImage {
        size: [rgba.width() as usize, rgba.height() as usize],
        rgba: rgba.into_raw(),
    })
}

/// Dark vertical gradient with a thin frame, drawn under the title text
pub fn placeholder_image(size: [usize; 2]) -> egui::ColorImage {
    let [width, height] = size;
    let mut rgba = vec![0u8; width * height * 4];

    for y in 0..height {
        // #171717 at the top to #262626 at the bottom
        let t = y as f32 / height.max(1) as f32;
        let shade = (23.0 + (38.0 - 23.0) * t) as u8;

        for x in 0..width {
            let idx = (y * width + x) * 4;
            let on_frame = x < 2 || y < 2 || x + 2 >= width || y + 2 >= height;
            let value = if on_frame { 64 } else { shade };
            rgba[idx] = value;
            rgba[idx + 1] = value;
            rgba[idx + 2] = value;
            rgba[idx + 3] = 255;
        }
    }

    egui::ColorImage::from_rgba_unmultiplied(size, &rgba)
}

/// State of one image slot
pub enum ImageSlot {
    Loading,
    Ready(egui::TextureHandle),
    /// Terminal: the placeholder is shown and the image is never requested again
    Failed,
}

type SlotKey = (String, ImageKind);

struct LoadResult {
    key: SlotKey,
    result: Result<DecodedImage, ImageError>,
}

pub struct ImageCache {
    source: CoversSource,
    slots: HashMap<SlotKey, ImageSlot>,
    placeholders: HashMap<ImageKind, egui::TextureHandle>,
    in_flight: usize,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl ImageCache {
    pub fn new(source: CoversSource) -> Self {
        let (sender, receiver) = channel();
        Self {
            source,
            slots: HashMap::new(),
            placeholders: HashMap::new(),
            in_flight: 0,
            sender,
            receiver,
        }
    }

    /// Point at a different covers source and drop everything loaded from the old one
    pub fn set_source(&mut self, source: CoversSource) {
        if source == self.source {
            return;
        }
        debug!(?source, "covers source changed");
        self.source = source;
        self.slots.clear();
        // Results still in flight carry keys for the old source; give them a fresh channel
        let (sender, receiver) = channel();
        self.sender = sender;
        self.receiver = receiver;
        self.in_flight = 0;
    }

    /// Current slot for an image, starting a background load on first request
    pub fn request(&mut self, ctx: &egui::Context, id: &str, kind: ImageKind) -> &ImageSlot {
        let key = (id.to_string(), kind);
        if !self.slots.contains_key(&key) {
            self.spawn_load(ctx, key.clone());
            self.slots.insert(key.clone(), ImageSlot::Loading);
        }
        &self.slots[&key]
    }

    fn spawn_load(&mut self, ctx: &egui::Context, key: SlotKey) {
        let source = self.source.clone();
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        self.in_flight += 1;

        std::thread::spawn(move || {
            let result = load_image(&source, &key.0, key.1);
            let _ = sender.send(LoadResult { key, result });
            ctx.request_repaint();
        });
    }

    /// Upload finished loads. Call once per frame before drawing.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(LoadResult { key, result }) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let slot = match result {
                Ok(decoded) => {
                    let name = format!("{}:{:?}", key.0, key.1);
                    let image = egui::ColorImage::from_rgba_unmultiplied(decoded.size, &decoded.rgba);
                    ImageSlot::Ready(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    debug!(id = %key.0, kind = ?key.1, error = %e, "image unavailable, using placeholder");
                    ImageSlot::Failed
                }
            };
            self.slots.insert(key, slot);
        }
    }

    pub fn placeholder(&mut self, ctx: &egui::Context, kind: ImageKind) -> egui::TextureHandle {
        self.placeholders
            .entry(kind)
            .or_insert_with(|| {
                ctx.load_texture(
                    format!("placeholder:{:?}", kind),
                    placeholder_image(kind.placeholder_size()),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wait_idle(cache: &mut ImageCache, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while cache.in_flight() > 0 && Instant::now() < deadline {
            cache.poll(ctx);
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(
            CoversSource::parse("https://cdn.example.com/covers/"),
            CoversSource::Remote("https://cdn.example.com/covers".to_string())
        );
        assert_eq!(CoversSource::parse(""), CoversSource::Directory(PathBuf::from("covers")));
        assert_eq!(
            CoversSource::parse("http://h/c").locate("dune", ImageKind::Backdrop),
            "http://h/c/dune-backdrop.jpg"
        );
    }

    #[test]
    fn test_missing_image_fails_once() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(CoversSource::Directory(dir.path().to_path_buf()));

        assert!(matches!(cache.request(&ctx, "dune", ImageKind::Poster), ImageSlot::Loading));
        wait_idle(&mut cache, &ctx);
        assert!(matches!(cache.request(&ctx, "dune", ImageKind::Poster), ImageSlot::Failed));

        // Creating the file afterwards does not bring the slot back
        image::RgbaImage::new(2, 2).save(dir.path().join("dune.jpg")).ok();
        assert!(matches!(cache.request(&ctx, "dune", ImageKind::Poster), ImageSlot::Failed));
        assert_eq!(cache.in_flight(), 0);
    }

    #[test]
    fn test_undecodable_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("her.jpg"), b"not an image").unwrap();
        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(CoversSource::Directory(dir.path().to_path_buf()));

        cache.request(&ctx, "her", ImageKind::Poster);
        wait_idle(&mut cache, &ctx);
        assert!(matches!(cache.request(&ctx, "her", ImageKind::Poster), ImageSlot::Failed));
    }

    #[test]
    fn test_existing_image_loads() {
        let dir = tempfile::tempdir().unwrap();
        // Format is sniffed from the bytes, not the extension
        image::RgbaImage::new(4, 6)
            .save_with_format(dir.path().join("matrix-backdrop.jpg"), image::ImageFormat::Png)
            .unwrap();

        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(CoversSource::Directory(dir.path().to_path_buf()));
        cache.request(&ctx, "matrix", ImageKind::Backdrop);
        wait_idle(&mut cache, &ctx);

        match cache.request(&ctx, "matrix", ImageKind::Backdrop) {
            ImageSlot::Ready(texture) => assert_eq!(texture.size(), [4, 6]),
            _ => panic!("expected a loaded texture"),
        }
    }

    #[test]
    fn test_placeholder_image_size() {
        let image = placeholder_image([30, 45]);
        assert_eq!(image.size, [30, 45]);
    }
}
