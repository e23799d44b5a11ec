//! Bar geometry
//!
//! Pure helpers that turn an anchor point, a size and a fill ratio into a
//! [`BarSpec`]. All fill ratios are clamped here so a transient
//! `current > max` from the host (regen ticks landing before the max updates)
//! can never draw past the bar frame.

use crate::color::ColorSet;
use glam::Vec2;

/// One bar plate: frame rectangle plus how much of it is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    origin: Vec2,
    size: Vec2,
    fill: f32,
    colors: ColorSet,
}

impl BarSpec {
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Bottom-right corner of the frame
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Fill ratio, always within [0, 1]
    pub fn fill(&self) -> f32 {
        self.fill
    }

    /// Bottom-right corner of the filled portion
    pub fn fill_max(&self) -> Vec2 {
        self.origin + Vec2::new(self.size.x * self.fill, self.size.y)
    }

    pub fn colors(&self) -> ColorSet {
        self.colors
    }

    pub fn with_colors(self, colors: ColorSet) -> Self {
        BarSpec { colors, ..self }
    }
}

/// Clamps a fill ratio into [0, 1]. NaN counts as empty.
pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() { 0.0 } else { scale.clamp(0.0, 1.0) }
}

/// `current / max` as a clamped fill ratio; `max == 0` gives 0
pub fn ratio(current: u32, max: u32) -> f32 {
    if max == 0 {
        0.0
    } else {
        clamp_scale(current as f32 / max as f32)
    }
}

/// Builds a bar anchored at its top-left corner
pub fn compute_bar(anchor: Vec2, width: f32, height: f32, scale: f32) -> BarSpec {
    BarSpec {
        origin: anchor,
        size: Vec2::new(width, height),
        fill: clamp_scale(scale),
        colors: ColorSet::NEUTRAL,
    }
}

/// Splits `total_width` into `cells` equal sub-bars separated by `gap` pixels.
///
/// Cell `i` is full when `i < charges` and empty otherwise; used by gauges
/// that count discrete stacks (cartridges, feathers, lilies).
pub fn charge_cells(
    anchor: Vec2,
    total_width: f32,
    height: f32,
    gap: f32,
    cells: u32,
    charges: u32,
) -> ChargeCells {
    let cell_width = if cells == 0 {
        0.0
    } else {
        ((total_width - gap * (cells - 1) as f32) / cells as f32).floor().max(0.0)
    };

    ChargeCells {
        anchor,
        cell_width,
        height,
        gap,
        cells,
        charges,
        next: 0,
    }
}

/// Iterator returned by [`charge_cells`]
#[derive(Debug, Clone)]
pub struct ChargeCells {
    anchor: Vec2,
    cell_width: f32,
    height: f32,
    gap: f32,
    cells: u32,
    charges: u32,
    next: u32,
}

impl Iterator for ChargeCells {
    type Item = BarSpec;

    fn next(&mut self) -> Option<BarSpec> {
        if self.next >= self.cells {
            return None;
        }

        let index = self.next;
        self.next += 1;

        let x = self.anchor.x + index as f32 * (self.cell_width + self.gap);
        let fill = if index < self.charges { 1.0 } else { 0.0 };
        Some(compute_bar(Vec2::new(x, self.anchor.y), self.cell_width, self.height, fill))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.cells - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChargeCells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_clamped() {
        let scales = [
            -5.0,
            -0.01,
            0.0,
            0.25,
            1.0,
            1.0001,
            42.0,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
        ];
        for scale in scales {
            let bar = compute_bar(Vec2::ZERO, 100.0, 10.0, scale);
            assert!((0.0..=1.0).contains(&bar.fill()), "scale {scale} gave {}", bar.fill());
        }
        assert_eq!(compute_bar(Vec2::ZERO, 100.0, 10.0, 2.0).fill(), 1.0);
        assert_eq!(compute_bar(Vec2::ZERO, 100.0, 10.0, -1.0).fill(), 0.0);
    }

    #[test]
    fn test_fill_never_overshoots_frame() {
        let bar = compute_bar(Vec2::new(10.0, 20.0), 270.0, 50.0, 1.3);
        assert_eq!(bar.fill_max(), bar.max());
    }

    #[test]
    fn test_half_fill_geometry() {
        let bar = compute_bar(Vec2::new(10.0, 20.0), 270.0, 50.0, 0.5);
        assert_eq!(bar.max(), Vec2::new(280.0, 70.0));
        assert_eq!(bar.fill_max(), Vec2::new(145.0, 70.0));
    }

    #[test]
    fn test_ratio_guards_zero_max() {
        assert_eq!(ratio(100, 0), 0.0);
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(4000, 8000), 0.5);
        assert_eq!(ratio(9000, 8000), 1.0);
    }

    #[test]
    fn test_with_colors_keeps_geometry() {
        let colors = ColorSet::solid(0xFF00_FF00);
        let bar = compute_bar(Vec2::ONE, 5.0, 5.0, 0.3).with_colors(colors);
        assert_eq!(bar.colors(), colors);
        assert_eq!(bar.origin(), Vec2::ONE);
    }

    #[test]
    fn test_two_charge_cells_with_gap() {
        let cells: Vec<_> = charge_cells(Vec2::new(100.0, 50.0), 254.0, 13.0, 2.0, 2, 1).collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].size(), Vec2::new(126.0, 13.0));
        assert_eq!(cells[0].fill(), 1.0);
        assert_eq!(cells[1].origin(), Vec2::new(228.0, 50.0));
        assert_eq!(cells[1].fill(), 0.0);
        // Gap between the cells is exactly two pixels
        assert_eq!(cells[1].origin().x - cells[0].max().x, 2.0);
    }

    #[test]
    fn test_charges_beyond_cells_fill_everything() {
        let cells = charge_cells(Vec2::ZERO, 100.0, 10.0, 2.0, 4, 9);
        assert_eq!(cells.len(), 4);
        assert!(cells.into_iter().all(|cell| cell.fill() == 1.0));
    }

    #[test]
    fn test_zero_cells() {
        assert_eq!(charge_cells(Vec2::ZERO, 100.0, 10.0, 2.0, 0, 0).count(), 0);
    }
}
