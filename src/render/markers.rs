// src/render/markers.rs
//! Marker layout for carved maps.
//!
//! A renderer places one marker per open cell. The layout here is independent of
//! any engine: the host calls [`MarkerField::animate`] with its own clock, once per
//! frame, and copies the resulting positions into whatever scene objects it owns.

use std::f32::consts::PI;

use log::debug;
use serde::Serialize;

use crate::error::CarveError;
use crate::map::{Grid, Position};
use crate::utils::Vec3;

/// Default side length, in world units, covered by a full grid.
pub const DEFAULT_DISTANCE_RANGE: f32 = 6.0;

/// Offset applied to both horizontal axes so the field sits near the origin.
const ORIGIN_OFFSET: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub cell: Position,
    pub position: Vec3,
    pub scale: Vec3,
}

/// Markers for every open cell of a grid, in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerField {
    step: f32,
    markers: Vec<Marker>,
}

impl MarkerField {
    /// Lays out markers so the whole grid spans `distance_range` units.
    pub fn from_grid(grid: &Grid, distance_range: f32) -> Result<Self, CarveError> {
        if !distance_range.is_finite() || distance_range <= 0.0 {
            return Err(CarveError::invalid(
                "distance_range",
                format!("must be a positive number, got {}", distance_range),
            ));
        }
        if grid.dimension() == 0 {
            return Err(CarveError::invalid("dimension", "must be greater than zero"));
        }

        let step = distance_range / grid.dimension() as f32;
        let scale = Vec3::ONE.scaled(step);
        let markers: Vec<Marker> = grid
            .open_cells()
            .map(|cell| Marker {
                cell,
                position: Vec3::new(
                    (cell.row as f32 + 0.5) * step - ORIGIN_OFFSET,
                    0.0,
                    (cell.col as f32 + 0.5) * step - ORIGIN_OFFSET,
                ),
                scale,
            })
            .collect();

        debug!("Laid out {} markers with step {}", markers.len(), step);
        Ok(MarkerField { step, markers })
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Sets every marker's height to `sin(PI * (z + time))`.
    pub fn animate(&mut self, time: f32) {
        for marker in &mut self.markers {
            marker.position.y = wave_height(marker.position.z, time);
        }
    }
}

fn wave_height(z: f32, time: f32) -> f32 {
    (PI * (z + time)).sin()
}
