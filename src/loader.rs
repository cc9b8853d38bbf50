//! Tile artwork production, off the frame thread.
//!
//! Every tile's surface is a composited bitmap: a flat background with the
//! entry's icon centered on it. Composition and file
//! decoding happen on a worker thread; finished bitmaps come back over a
//! channel and are drained once per frame tick, so texture binding stays
//! confined to the frame thread. A missing or unreadable icon degrades to
//! the plain background tile with a warning; tiles never fail to exist.

use crate::config;
use crate::manifest::{ChildDef, MenuManifest};
use image::imageops::FilterType;
use image::{imageops, Rgba, RgbaImage};
use log::{debug, warn};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

/// Where a finished bitmap belongs in the menu tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileSlot {
    Backdrop,
    Entry(usize),
    Child { entry: usize, child: usize },
}

/// What to composite for a slot.
#[derive(Clone, Debug)]
pub enum TileArt {
    /// Top-level tile: background with the icon drawn doubled, leaving room
    /// for the label strip along the bottom.
    EntryTile { label: String, icon: Option<PathBuf> },
    /// Compact square icon tile for icon-kind children.
    IconTile { source: PathBuf },
    /// Flattened strip for text-kind children. Label rasterization is the
    /// host's concern; the engine supplies the background.
    TextTile { label: String },
    /// Full image for the backdrop plane.
    Backdrop { source: PathBuf },
}

fn filled_tile(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(config::TILE_BACKGROUND))
}

fn open_icon(path: &PathBuf) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            warn!("icon {path:?} unavailable, using plain tile: {e}");
            None
        }
    }
}

/// Produce the bitmap for one slot. Infallible: every failure mode falls
/// back to the plain background.
pub fn compose_tile(art: &TileArt) -> RgbaImage {
    match art {
        TileArt::EntryTile { label, icon } => {
            debug!("composing entry tile '{label}'");
            let mut tile = filled_tile(config::ENTRY_TILE_WIDTH, config::ENTRY_TILE_HEIGHT);
            if let Some(icon) = icon.as_ref().and_then(open_icon) {
                let (iw, ih) = icon.dimensions();
                let doubled = imageops::resize(&icon, iw * 2, ih * 2, FilterType::Triangle);
                let x = i64::from(config::ENTRY_TILE_WIDTH / 2) - i64::from(iw);
                let y = i64::from(config::ENTRY_TILE_HEIGHT / 2) - i64::from(ih) * 3 / 2;
                imageops::overlay(&mut tile, &doubled, x, y);
            }
            tile
        }
        TileArt::IconTile { source } => {
            let size = config::SUB_ICON_TILE_SIZE;
            let mut tile = filled_tile(size, size);
            if let Some(icon) = open_icon(source) {
                let (iw, ih) = icon.dimensions();
                let x = i64::from(size / 2) - i64::from(iw / 2);
                let y = i64::from(size / 2) - i64::from(ih / 2);
                imageops::overlay(&mut tile, &icon, x, y);
            }
            tile
        }
        TileArt::TextTile { label } => {
            debug!("composing text tile '{label}'");
            filled_tile(config::SUB_TEXT_TILE_WIDTH, config::SUB_TEXT_TILE_HEIGHT)
        }
        TileArt::Backdrop { source } => match image::open(source) {
            Ok(img) => img.to_rgba8(),
            Err(e) => {
                warn!("backdrop {source:?} unavailable, using flat fill: {e}");
                filled_tile(config::WINDOW_WIDTH, config::WINDOW_HEIGHT)
            }
        },
    }
}

/// Worker-thread tile production with per-frame delivery.
pub struct TileLoader {
    jobs: Sender<(TileSlot, TileArt)>,
    done: Receiver<(TileSlot, RgbaImage)>,
}

impl TileLoader {
    /// Start the worker. It exits when the loader is dropped.
    pub fn spawn() -> Self {
        let (jobs, job_rx) = mpsc::channel::<(TileSlot, TileArt)>();
        let (done_tx, done) = mpsc::channel();
        std::thread::spawn(move || {
            for (slot, art) in job_rx {
                let image = compose_tile(&art);
                if done_tx.send((slot, image)).is_err() {
                    break;
                }
            }
            debug!("tile worker finished");
        });
        Self { jobs, done }
    }

    pub fn request(&self, slot: TileSlot, art: TileArt) {
        if self.jobs.send((slot, art)).is_err() {
            warn!("tile worker is gone; dropping request for {slot:?}");
        }
    }

    /// Queue every tile a manifest describes.
    pub fn request_manifest(&self, manifest: &MenuManifest) {
        if let Some(backdrop) = &manifest.backdrop {
            self.request(
                TileSlot::Backdrop,
                TileArt::Backdrop {
                    source: PathBuf::from(backdrop),
                },
            );
        }
        for (i, entry) in manifest.entries.iter().enumerate() {
            self.request(
                TileSlot::Entry(i),
                TileArt::EntryTile {
                    label: entry.name.clone(),
                    icon: entry.icon.as_ref().map(PathBuf::from),
                },
            );
            for (j, child) in entry.children.iter().enumerate() {
                let slot = TileSlot::Child { entry: i, child: j };
                match child {
                    ChildDef::Icon { source } => self.request(
                        slot,
                        TileArt::IconTile {
                            source: PathBuf::from(source),
                        },
                    ),
                    ChildDef::Text { label } => self.request(
                        slot,
                        TileArt::TextTile {
                            label: label.clone(),
                        },
                    ),
                }
            }
        }
    }

    /// Everything that finished since the last poll.
    pub fn poll(&mut self) -> Vec<(TileSlot, RgbaImage)> {
        self.done.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn text_tile_is_the_background_strip() {
        let tile = compose_tile(&TileArt::TextTile {
            label: "GUIDE".into(),
        });
        assert_eq!(tile.dimensions(), (240, 60));
        assert_eq!(tile.get_pixel(0, 0).0, config::TILE_BACKGROUND);
    }

    #[test]
    fn entry_tile_without_icon_is_plain() {
        let tile = compose_tile(&TileArt::EntryTile {
            label: "SEARCH".into(),
            icon: None,
        });
        assert_eq!(tile.dimensions(), (240, 180));
    }

    #[test]
    fn missing_icon_degrades_to_the_plain_tile() {
        let tile = compose_tile(&TileArt::IconTile {
            source: PathBuf::from("definitely/not/here.png"),
        });
        assert_eq!(tile.dimensions(), (55, 55));
        assert_eq!(tile.get_pixel(27, 27).0, config::TILE_BACKGROUND);
    }

    #[test]
    fn worker_delivers_composed_tiles() {
        let mut loader = TileLoader::spawn();
        loader.request(
            TileSlot::Child { entry: 2, child: 0 },
            TileArt::TextTile {
                label: "FAMILY".into(),
            },
        );

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let delivered = loader.poll();
            if !delivered.is_empty() {
                assert_eq!(delivered[0].0, TileSlot::Child { entry: 2, child: 0 });
                assert_eq!(delivered[0].1.dimensions(), (240, 60));
                break;
            }
            assert!(Instant::now() < deadline, "tile never arrived");
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}
