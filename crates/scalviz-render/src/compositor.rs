//! Grid compositing of rendered charts.
//!
//! Tiles are placed left to right and wrap every `row_size` images.
//! Each row is as tall as its own tallest tile, so rows of different
//! heights never overlap.

use std::path::Path;

use image::{Rgb, RgbImage};
use scalviz_types::{ScalvizError, ScalvizResult};

use crate::output::{image_error, write_atomic};

/// Canvas color behind tiles that do not fill their cell.
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Pixel placement of every tile in a composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeLayout {
    /// Composite canvas width.
    pub width: u32,
    /// Composite canvas height.
    pub height: u32,
    /// Top-left corner of each tile, in input order.
    pub offsets: Vec<(u32, u32)>,
}

impl CompositeLayout {
    /// Computes tile offsets from tile sizes.
    ///
    /// Fails with [`ScalvizError::MalformedGroup`] unless the tile count
    /// is a positive multiple of `row_size`.
    pub fn plan(sizes: &[(u32, u32)], row_size: usize) -> ScalvizResult<Self> {
        if row_size == 0 || sizes.is_empty() || sizes.len() % row_size != 0 {
            return Err(ScalvizError::MalformedGroup {
                count: sizes.len(),
                row_size,
            });
        }

        let mut offsets = Vec::with_capacity(sizes.len());
        let mut width = 0u32;
        let mut y = 0u32;
        for row in sizes.chunks(row_size) {
            let mut x = 0u32;
            for &(w, _) in row {
                offsets.push((x, y));
                x += w;
            }
            width = width.max(x);
            y += row.iter().map(|&(_, h)| h).max().unwrap_or(0);
        }

        Ok(Self {
            width,
            height: y,
            offsets,
        })
    }
}

/// Combines groups of chart images into one grid image.
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    row_size: usize,
}

impl Compositor {
    /// Creates a compositor wrapping every `row_size` tiles.
    pub fn new(row_size: usize) -> ScalvizResult<Self> {
        if row_size == 0 {
            return Err(ScalvizError::InvalidConfig(
                "composite row size must be >= 1".into(),
            ));
        }
        Ok(Self { row_size })
    }

    pub fn row_size(&self) -> usize {
        self.row_size
    }

    /// Tiles `image_paths` into a grid and writes it to `output_path`.
    ///
    /// Only tile headers are read up front; each tile is then decoded,
    /// pasted and dropped before the next one is opened.
    pub fn combine<P: AsRef<Path>>(
        &self,
        image_paths: &[P],
        output_path: &Path,
    ) -> ScalvizResult<CompositeLayout> {
        if image_paths.is_empty() || image_paths.len() % self.row_size != 0 {
            return Err(ScalvizError::MalformedGroup {
                count: image_paths.len(),
                row_size: self.row_size,
            });
        }

        let sizes = image_paths
            .iter()
            .map(|p| {
                let path = p.as_ref();
                image::image_dimensions(path).map_err(|e| image_error(path, e))
            })
            .collect::<ScalvizResult<Vec<_>>>()?;
        let layout = CompositeLayout::plan(&sizes, self.row_size)?;

        let mut canvas = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
        for (p, &(x, y)) in image_paths.iter().zip(&layout.offsets) {
            let path = p.as_ref();
            let tile = image::open(path)
                .map_err(|e| image_error(path, e))?
                .to_rgb8();
            image::imageops::replace(&mut canvas, &tile, i64::from(x), i64::from(y));
        }

        write_atomic(&canvas, output_path)?;
        tracing::info!(
            composite = %output_path.display(),
            tiles = image_paths.len(),
            width = layout.width,
            height = layout.height,
            "composite written"
        );
        Ok(layout)
    }
}

