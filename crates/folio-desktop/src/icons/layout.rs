//! Icon position generation and the live icon layout

use rand::Rng;
use tracing::debug;

use crate::math::{clamp_lower_wins, Vec2};
use crate::viewport::Viewport;
use super::{IconLayoutConfig, IconLayoutPolicy, IconMetrics};

/// Deterministic grid cell used when sampling gives up on an icon
pub fn fallback_cell(metrics: &IconMetrics, index: usize) -> Vec2 {
    let columns = metrics.columns.max(1);
    let pitch = metrics.icon_size + metrics.cell_gap;
    let col = (index % columns) as f32;
    let row = (index / columns) as f32;
    Vec2::new(
        metrics.padding + col * pitch,
        metrics.top_reserve + row * pitch,
    )
}

/// Generate `count` icon origins for `viewport`.
///
/// Scatter samples uniformly inside the icon band and rejects candidates
/// closer than `min_spacing` to an already placed icon. After
/// `max_attempts` rejections the icon takes its fallback grid cell, even if
/// that overlaps.
pub fn generate_positions<R: Rng + ?Sized>(
    config: &IconLayoutConfig,
    viewport: &Viewport,
    count: usize,
    rng: &mut R,
) -> Vec<Vec2> {
    let metrics = IconMetrics::resolve(config, viewport);
    let count = count.min(config.max_icons);

    match config.policy {
        IconLayoutPolicy::Scatter => scatter(config, &metrics, viewport, count, rng),
        IconLayoutPolicy::Grid => even_grid(&metrics, viewport, count),
    }
}

fn scatter<R: Rng + ?Sized>(
    config: &IconLayoutConfig,
    metrics: &IconMetrics,
    viewport: &Viewport,
    count: usize,
    rng: &mut R,
) -> Vec<Vec2> {
    let available_width =
        (viewport.width() - 2.0 * metrics.padding - metrics.icon_size).max(0.0);
    let available_height = (viewport.height()
        - metrics.top_reserve
        - metrics.bottom_reserve
        - metrics.icon_size)
        .max(0.0);

    let mut positions: Vec<Vec2> = Vec::with_capacity(count);
    let mut fallbacks = 0usize;

    for index in 0..count {
        let mut placed = None;

        for _ in 0..config.max_attempts {
            let candidate = Vec2::new(
                metrics.padding + rng.gen::<f32>() * available_width,
                metrics.top_reserve + rng.gen::<f32>() * available_height,
            );
            let clear = positions
                .iter()
                .all(|p| p.distance(candidate) >= metrics.min_spacing);
            if clear {
                placed = Some(candidate);
                break;
            }
        }

        let position = placed.unwrap_or_else(|| {
            fallbacks += 1;
            fallback_cell(metrics, index)
        });
        positions.push(position);
    }

    debug!(
        count,
        fallbacks,
        width = viewport.width(),
        height = viewport.height(),
        "scattered icons"
    );
    positions
}

/// Row-major grid spread across the usable width. Columns are dropped until
/// neighbours sit at least `min_spacing` apart; rows use `min_spacing` pitch.
fn even_grid(metrics: &IconMetrics, viewport: &Viewport, count: usize) -> Vec<Vec2> {
    let usable = (viewport.width() - 2.0 * metrics.padding - metrics.icon_size).max(0.0);

    let column_pitch = |columns: usize| {
        if columns > 1 {
            usable / ((columns - 1) as f32)
        } else {
            0.0
        }
    };

    let mut columns = metrics.columns.max(1).min(count.max(1));
    while columns > 1 && column_pitch(columns) < metrics.min_spacing {
        columns -= 1;
    }
    let pitch_x = column_pitch(columns);

    (0..count)
        .map(|index| {
            let col = (index % columns) as f32;
            let row = (index / columns) as f32;
            Vec2::new(
                metrics.padding + col * pitch_x,
                metrics.top_reserve + row * metrics.min_spacing,
            )
        })
        .collect()
}

/// Icon positions for the current viewport, plus any user drags since
#[derive(Clone, Debug)]
pub struct IconLayout {
    config: IconLayoutConfig,
    count: usize,
    positions: Vec<Vec2>,
    /// Viewport the positions were generated for
    laid_out_for: Option<Viewport>,
}

impl IconLayout {
    pub fn new(config: IconLayoutConfig, count: usize) -> Self {
        let count = count.min(config.max_icons);
        Self {
            config,
            count,
            positions: Vec::new(),
            laid_out_for: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &IconLayoutConfig {
        &self.config
    }

    /// Number of icon slots
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.positions.get(index).copied()
    }

    /// Icon footprint for the viewport last laid out for
    pub fn metrics(&self) -> Option<IconMetrics> {
        self.laid_out_for
            .as_ref()
            .map(|viewport| IconMetrics::resolve(&self.config, viewport))
    }

    /// Regenerate all positions unless already laid out for `viewport`.
    /// Returns whether positions changed.
    pub fn relayout<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) -> bool {
        if self.laid_out_for.as_ref() == Some(viewport) {
            return false;
        }
        self.positions = generate_positions(&self.config, viewport, self.count, rng);
        self.laid_out_for = Some(*viewport);
        true
    }

    /// Keep a dragged icon on screen and clear of the dock
    pub fn clamp_icon_position(&self, position: Vec2, viewport: &Viewport) -> Vec2 {
        let icon = IconMetrics::resolve(&self.config, viewport).icon_size;
        Vec2::new(
            clamp_lower_wins(position.x, 0.0, viewport.width() - icon),
            clamp_lower_wins(
                position.y,
                0.0,
                viewport.height() - icon - self.config.drag_bottom_reserve,
            ),
        )
    }

    /// Move icon `index` to `position` (clamped). Returns the stored position.
    pub fn move_icon(&mut self, index: usize, position: Vec2, viewport: &Viewport) -> Option<Vec2> {
        let clamped = self.clamp_icon_position(position, viewport);
        let slot = self.positions.get_mut(index)?;
        *slot = clamped;
        Some(clamped)
    }
}
