//! Tile field generation
//!
//! The field is a fixed `rows x cols` grid. Every tile is surrounded by `gap`
//! on all sides, so `cols` tiles and their gaps span the field width exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Tile;
use crate::config::GameConfig;

/// Row-major grid of tiles. Indices are stable for the session lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get_mut(row * self.cols + col)
    }

    /// Tiles with their (row, col), top row first, left to right
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i / cols, i % cols, tile))
    }

    pub fn alive(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }
}

/// Build the initial grid, all tiles alive
pub fn generate_tiles(config: &GameConfig) -> TileGrid {
    let width = config.tile_width();
    let height = config.tile_height;
    let gap = config.gap;

    let mut tiles = Vec::with_capacity(config.rows * config.cols);
    for row in 0..config.rows {
        for col in 0..config.cols {
            let x = (2 * col + 1) as f32 * gap + col as f32 * width;
            let y = (2 * row + 1) as f32 * gap + row as f32 * height;
            tiles.push(Tile::new(Vec2::new(x, y)));
        }
    }

    TileGrid {
        rows: config.rows,
        cols: config.cols,
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let grid = generate_tiles(&GameConfig::default());
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.alive_count(), 18);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 6).is_none());
    }

    #[test]
    fn test_first_tile_offset_by_gap() {
        let grid = generate_tiles(&GameConfig::default());
        let tile = grid.get(0, 0).unwrap();
        assert_eq!(tile.pos, Vec2::new(3.0, 3.0));

        let below = grid.get(1, 0).unwrap();
        assert_eq!(below.pos.y, 3.0 + 25.0 + 6.0);
    }

    #[test]
    fn test_row_fills_field_width() {
        let config = GameConfig::default();
        let grid = generate_tiles(&config);
        let last = grid.get(0, config.cols - 1).unwrap();
        let right_edge = last.max(&config).x + config.gap;
        assert!((right_edge - config.field_width).abs() < 1e-3);
    }

    #[test]
    fn test_uniform_spacing() {
        let config = GameConfig::default();
        let grid = generate_tiles(&config);
        let step = config.tile_width() + 2.0 * config.gap;
        for col in 1..config.cols {
            let prev = grid.get(2, col - 1).unwrap().pos.x;
            let cur = grid.get(2, col).unwrap().pos.x;
            assert!((cur - prev - step).abs() < 1e-3);
        }
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = generate_tiles(&GameConfig::default());
        let order: Vec<(usize, usize)> = grid.iter().map(|(r, c, _)| (r, c)).take(7).collect();
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[5], (0, 5));
        assert_eq!(order[6], (1, 0));
    }
}
