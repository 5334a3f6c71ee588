use crate::error::OcrError;
use crate::preprocessing::PreprocessOptions;
use image::{DynamicImage, GrayImage, Luma};

/// Apply contrast-limited adaptive histogram equalization (CLAHE)
/// Equalizes each tile of a grid separately, so uneven lighting across the
/// image does not wash out text in darker or brighter regions.
pub fn apply(image: DynamicImage, options: &PreprocessOptions) -> Result<DynamicImage, OcrError> {
    let gray = image.into_luma8();
    let equalized = clahe(&gray, options.clahe_grid, options.clahe_clip_limit);
    Ok(DynamicImage::ImageLuma8(equalized))
}

/// Tile layout along one axis.
///
/// The axis is padded up to a multiple of the grid so every tile has the same
/// size; padded coordinates mirror back into the image (reflect-101).
struct Tiles {
    count: u32,
    size: u32,
    len: u32,
}

impl Tiles {
    fn new(len: u32, grid: u32) -> Self {
        let count = grid.max(1);
        Self {
            count,
            size: len.div_ceil(count),
            len,
        }
    }

    /// Image coordinate for a possibly padded coordinate `p`
    fn source(&self, p: u32) -> u32 {
        reflect101(p, self.len)
    }

    /// Neighbouring tiles and the weight of the second one for coordinate `p`
    fn neighbours(&self, p: u32) -> (usize, usize, f32) {
        let pos = p as f32 / self.size as f32 - 0.5;
        let last = self.count as i64 - 1;
        let lower = pos.floor() as i64;
        let weight = pos - lower as f32;
        let first = lower.clamp(0, last);
        let second = (lower + 1).clamp(0, last);
        (first as usize, second as usize, weight)
    }
}

/// Mirror `p` into `[0, len)` without repeating the edge pixel
fn reflect101(p: u32, len: u32) -> u32 {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let m = p % period;
    if m < len {
        m
    } else {
        period - m
    }
}

fn clahe(img: &GrayImage, grid: u32, clip_limit: f32) -> GrayImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }

    let tiles_x = Tiles::new(width, grid);
    let tiles_y = Tiles::new(height, grid);

    let mut luts = Vec::with_capacity((tiles_x.count * tiles_y.count) as usize);
    for ty in 0..tiles_y.count {
        for tx in 0..tiles_x.count {
            luts.push(tile_lut(img, &tiles_x, &tiles_y, tx, ty, clip_limit));
        }
    }

    let lut_at = |tx: usize, ty: usize| &luts[ty * tiles_x.count as usize + tx];

    GrayImage::from_fn(width, height, |x, y| {
        let value = img.get_pixel(x, y).0[0] as usize;
        let (tx1, tx2, xa) = tiles_x.neighbours(x);
        let (ty1, ty2, ya) = tiles_y.neighbours(y);

        let top =
            lut_at(tx1, ty1)[value] as f32 * (1.0 - xa) + lut_at(tx2, ty1)[value] as f32 * xa;
        let bottom =
            lut_at(tx1, ty2)[value] as f32 * (1.0 - xa) + lut_at(tx2, ty2)[value] as f32 * xa;
        let mapped = top * (1.0 - ya) + bottom * ya;

        Luma([mapped.round().clamp(0.0, 255.0) as u8])
    })
}

/// Clipped, redistributed histogram of one tile turned into a lookup table
fn tile_lut(
    img: &GrayImage,
    tiles_x: &Tiles,
    tiles_y: &Tiles,
    tx: u32,
    ty: u32,
    clip_limit: f32,
) -> [u8; 256] {
    let mut histogram = [0u32; 256];
    for y in ty * tiles_y.size..(ty + 1) * tiles_y.size {
        for x in tx * tiles_x.size..(tx + 1) * tiles_x.size {
            let pixel = img.get_pixel(tiles_x.source(x), tiles_y.source(y));
            histogram[pixel.0[0] as usize] += 1;
        }
    }

    let area = tiles_x.size * tiles_y.size;
    let mut lut = [0u8; 256];

    // Clip the histogram and spread the excess evenly over all bins
    let clip = ((clip_limit * area as f32 / 256.0) as u32).max(1);
    let mut excess = 0u32;
    for bin in histogram.iter_mut() {
        if *bin > clip {
            excess += *bin - clip;
            *bin = clip;
        }
    }

    let per_bin = excess / 256;
    let remainder = excess % 256;
    for bin in histogram.iter_mut() {
        *bin += per_bin;
    }
    if remainder > 0 {
        let step = (256 / remainder).max(1) as usize;
        for bin in histogram.iter_mut().step_by(step).take(remainder as usize) {
            *bin += 1;
        }
    }

    let scale = 255.0 / area as f32;
    let mut cumulative = 0u32;
    for (bin, v) in histogram.iter().zip(lut.iter_mut()) {
        cumulative += bin;
        *v = (cumulative as f32 * scale).round().min(255.0) as u8;
    }

    lut
}
