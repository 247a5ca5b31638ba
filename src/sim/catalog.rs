//! Built-in obstacle layouts
//!
//! Rows are `[x, y, r, g, b, fall_speed]`; every obstacle shares the same
//! half-extent.

use super::obstacle::Obstacle;
use super::pattern::Pattern;

/// Half-extent shared by every authored obstacle
pub const OBSTACLE_SIZE: f32 = 0.05;

type ObstacleRow = [f32; 6];

fn build(rows: &[ObstacleRow]) -> Pattern {
    Pattern::new(
        rows.iter()
            .map(|&[x, y, r, g, b, speed]| Obstacle::new(x, y, OBSTACLE_SIZE, [r, g, b], speed))
            .collect(),
    )
}

/// The six lone obstacles on screen when a run starts
pub fn opening_wave() -> Pattern {
    build(OPENING_WAVE)
}

/// Every authored pattern, in catalog order
pub fn builtin_patterns() -> Vec<Pattern> {
    PATTERNS.iter().map(|rows| build(rows)).collect()
}

const OPENING_WAVE: &[ObstacleRow] = &[
    [-0.5, 0.0, 1.0, 0.0, 0.0, 0.01],
    [0.0, 0.2, 0.0, 1.0, 0.0, 0.01],
    [0.5, -0.1, 0.0, 0.0, 1.0, 0.01],
    [-0.7, 0.0, 1.0, 0.0, 0.0, 0.01],
    [1.0, 0.1, 0.0, 1.0, 0.0, 0.01],
    [0.3, -0.2, 0.0, 0.0, 1.0, 0.01],
];

const PATTERNS: &[&[ObstacleRow]] = &[
    PATTERN_00,
    PATTERN_01,
    PATTERN_02,
    PATTERN_03,
    PATTERN_04,
    PATTERN_05,
    PATTERN_06,
    PATTERN_07,
    PATTERN_08,
    PATTERN_09,
    PATTERN_10,
    PATTERN_11,
    PATTERN_12,
    PATTERN_13,
    PATTERN_14,
    PATTERN_15,
    PATTERN_16,
    PATTERN_17,
    PATTERN_18,
    PATTERN_19,
];

const PATTERN_00: &[ObstacleRow] = &[
    [-0.6, 1.0, 0.8, 0.2, 0.2, 0.01],
    [-0.4, 0.9, 0.8, 0.2, 0.2, 0.01],
    [-0.2, 0.8, 0.8, 0.2, 0.2, 0.01],
    [-0.8, 1.3, 0.8, 0.2, 0.2, 0.01],
    [-0.1, 0.7, 0.8, 0.2, 0.2, 0.01],
    [0.1, 0.4, 0.8, 0.2, 0.2, 0.01],
    [0.5, 0.3, 0.8, 0.2, 0.2, 0.01],
    [0.7, 0.6, 0.8, 0.2, 0.2, 0.01],
    [-0.6, 1.0, 0.8, 0.2, 0.2, 0.01],
    [-0.4, 0.9, 0.8, 0.2, 0.2, 0.01],
    [-0.2, 0.8, 0.8, 0.2, 0.2, 0.01],
    [-0.8, 1.0, 0.8, 0.2, 0.2, 0.01],
    [-0.2, 0.3, 0.8, 0.2, 0.2, 0.01],
    [0.3, 0.9, 0.8, 0.2, 0.2, 0.01],
    [0.5, 0.3, 0.8, 0.2, 0.2, 0.01],
    [0.7, 0.2, 0.8, 0.2, 0.2, 0.01],
];

const PATTERN_01: &[ObstacleRow] = &[
    [-0.5, 1.2, 0.6, 0.4, 0.4, 0.016],
    [-0.3, 1.0, 0.6, 0.4, 0.4, 0.016],
    [0.0, 0.8, 0.6, 0.4, 0.4, 0.016],
    [0.4, 1.1, 0.6, 0.4, 0.4, 0.016],
    [0.7, 0.9, 0.6, 0.4, 0.4, 0.016],
    [-0.6, 0.7, 0.6, 0.4, 0.4, 0.016],
    [0.2, 0.5, 0.6, 0.4, 0.4, 0.016],
    [0.5, 0.3, 0.6, 0.4, 0.4, 0.016],
    [-0.5, 1.1, 0.4, 0.6, 0.2, 0.011],
    [-0.2, 0.9, 0.4, 0.6, 0.2, 0.011],
    [0.1, 0.7, 0.4, 0.6, 0.2, 0.011],
    [0.3, 1.0, 0.4, 0.6, 0.2, 0.011],
    [0.6, 0.8, 0.4, 0.6, 0.2, 0.011],
    [0.8, 1.2, 0.4, 0.6, 0.2, 0.011],
    [-0.7, 0.6, 0.4, 0.6, 0.2, 0.011],
    [0.4, 0.4, 0.4, 0.6, 0.2, 0.011],
];

const PATTERN_02: &[ObstacleRow] = &[
    [-0.8, 1.1, 0.7, 0.3, 0.3, 0.015],
    [-0.6, 0.9, 0.7, 0.3, 0.3, 0.015],
    [-0.4, 0.7, 0.7, 0.3, 0.3, 0.015],
    [-0.1, 1.0, 0.7, 0.3, 0.3, 0.015],
    [0.3, 0.8, 0.7, 0.3, 0.3, 0.015],
    [0.6, 1.2, 0.7, 0.3, 0.3, 0.015],
    [0.8, 0.6, 0.7, 0.3, 0.3, 0.015],
    [0.5, 0.4, 0.7, 0.3, 0.3, 0.015],
    [-0.7, 1.2, 0.5, 0.5, 0.3, 0.010],
    [-0.4, 1.0, 0.5, 0.5, 0.3, 0.010],
    [-0.1, 0.8, 0.5, 0.5, 0.3, 0.010],
    [0.2, 1.1, 0.5, 0.5, 0.3, 0.010],
    [0.5, 0.9, 0.5, 0.5, 0.3, 0.010],
    [0.7, 1.3, 0.5, 0.5, 0.3, 0.010],
    [-0.6, 0.5, 0.5, 0.5, 0.3, 0.010],
    [0.3, 0.3, 0.5, 0.5, 0.3, 0.010],
];

const PATTERN_03: &[ObstacleRow] = &[
    [-0.8, 1.1, 0.9, 0.1, 0.1, 0.010],
    [-0.6, 0.9, 0.1, 0.9, 0.1, 0.015],
    [-0.4, 0.7, 0.1, 0.1, 0.9, 0.020],
    [-0.2, 1.0, 0.9, 0.5, 0.1, 0.012],
    [0.0, 0.8, 0.1, 0.5, 0.9, 0.018],
    [0.2, 1.2, 0.5, 0.1, 0.9, 0.014],
    [0.4, 0.6, 0.9, 0.9, 0.1, 0.011],
    [0.6, 0.4, 0.7, 0.1, 0.7, 0.016],
    [-0.8, 0.3, 0.1, 0.7, 0.7, 0.013],
    [-0.5, 0.5, 0.3, 0.3, 0.9, 0.017],
    [0.1, 0.2, 0.9, 0.3, 0.3, 0.019],
    [0.3, 0.0, 0.3, 0.9, 0.3, 0.008],
];

const PATTERN_04: &[ObstacleRow] = &[
    [-0.7, 1.0, 0.5, 0.2, 0.5, 0.012],
    [-0.5, 0.8, 0.2, 0.5, 0.5, 0.018],
    [-0.3, 0.6, 0.5, 0.5, 0.2, 0.021],
    [-0.1, 0.9, 0.5, 0.2, 0.2, 0.014],
    [0.1, 0.7, 0.2, 0.5, 0.2, 0.016],
    [0.3, 1.1, 0.2, 0.2, 0.5, 0.010],
    [0.5, 0.5, 0.7, 0.7, 0.2, 0.013],
    [0.7, 0.3, 0.2, 0.7, 0.7, 0.015],
    [-0.7, 0.2, 0.7, 0.2, 0.7, 0.017],
    [-0.4, 0.4, 0.7, 0.5, 0.2, 0.019],
    [0.2, 0.1, 0.5, 0.7, 0.5, 0.011],
    [0.6, -0.1, 0.3, 0.2, 0.7, 0.020],
];

const PATTERN_05: &[ObstacleRow] = &[
    [-0.6, 1.2, 0.3, 0.3, 0.7, 0.013],
    [-0.4, 1.0, 0.7, 0.3, 0.3, 0.015],
    [-0.2, 0.8, 0.3, 0.7, 0.3, 0.017],
    [0.0, 1.1, 0.3, 0.3, 0.7, 0.019],
    [0.2, 0.9, 0.7, 0.3, 0.7, 0.011],
    [0.4, 1.3, 0.3, 0.7, 0.7, 0.014],
    [0.6, 0.7, 0.7, 0.7, 0.3, 0.016],
    [0.8, 0.5, 0.7, 0.3, 0.3, 0.018],
    [-0.6, 0.4, 0.3, 0.7, 0.3, 0.012],
    [-0.3, 0.2, 0.7, 0.7, 0.7, 0.020],
    [0.1, 0.0, 0.3, 0.3, 0.3, 0.022],
    [0.5, -0.2, 0.3, 0.7, 0.7, 0.010],
];

const PATTERN_06: &[ObstacleRow] = &[
    [0.68, 1.24, 0.72, 0.44, 0.33, 0.017],
    [-0.86, 0.83, 0.94, 0.92, 0.18, 0.016],
    [-0.19, 0.96, 0.47, 0.52, 0.48, 0.016],
    [0.98, 1.37, 0.65, 0.46, 0.97, 0.014],
    [-0.71, 1.25, 0.8, 0.41, 0.44, 0.018],
    [-0.8, 1.19, 0.4, 0.81, 0.63, 0.02],
    [-0.22, 1.08, 0.42, 0.14, 0.48, 0.019],
    [0.46, 1.2, 0.01, 0.44, 0.71, 0.013],
    [0.47, 0.68, 0.63, 0.71, 0.51, 0.019],
    [0.3, 1.37, 0.62, 0.02, 0.97, 0.02],
    [0.17, 1.42, 0.68, 0.2, 0.16, 0.017],
    [-0.89, 0.63, 0.24, 0.63, 0.72, 0.018],
];

const PATTERN_07: &[ObstacleRow] = &[
    [0.09, 1.07, 0.05, 0.64, 0.26, 0.01],
    [0.94, 1.08, 0.9, 0.48, 0.94, 0.011],
    [-0.62, 1.44, 0.21, 0.47, 0.42, 0.015],
    [-0.25, 0.96, 0.18, 0.08, 0.01, 0.013],
    [-0.8, 0.52, 0.49, 0.44, 0.01, 0.014],
    [0.19, 0.72, 0.94, 0.87, 0.83, 0.015],
    [-0.59, 1.25, 0.44, 0.04, 0.03, 0.016],
    [-0.13, 0.97, 0.85, 0.96, 0.87, 0.016],
    [-0.98, 1.2, 0.45, 0.42, 0.68, 0.015],
    [0.85, 0.9, 0.46, 0.44, 0.33, 0.013],
    [-0.82, 0.71, 0.06, 0.98, 0.57, 0.018],
    [0.65, 1.19, 0.35, 0.66, 0.74, 0.014],
];

const PATTERN_08: &[ObstacleRow] = &[
    [-0.37, 0.76, 0.44, 0.39, 0.12, 0.017],
    [-0.12, 0.85, 0.58, 0.74, 0.34, 0.013],
    [-0.25, 0.5, 0.01, 0.75, 0.54, 0.018],
    [-0.15, 0.54, 0.39, 0.42, 0.98, 0.015],
    [0.26, 0.69, 0.42, 0.09, 0.82, 0.012],
    [0.28, 1.35, 0.89, 0.71, 0.44, 0.011],
    [-0.99, 1.39, 0.22, 0.56, 0.63, 0.013],
    [-0.33, 0.53, 0.66, 0.33, 0.13, 0.017],
    [-0.18, 1.06, 0.96, 0.25, 0.59, 0.013],
    [0.98, 1.47, 0.48, 0.34, 0.71, 0.019],
    [-0.04, 1.23, 0.46, 0.09, 0.27, 0.017],
    [-0.8, 0.97, 0.14, 0.55, 0.61, 0.011],
];

const PATTERN_09: &[ObstacleRow] = &[
    [-0.2, 1.38, 0.92, 0.83, 0.33, 0.011],
    [-0.19, 0.54, 0.77, 0.33, 0.06, 0.01],
    [0.24, 0.77, 0.54, 0.6, 0.03, 0.01],
    [0.53, 1.19, 0.06, 0.4, 0.48, 0.014],
    [-0.51, 0.72, 0.81, 0.81, 0.29, 0.018],
    [0.98, 0.59, 0.74, 0.72, 0.53, 0.011],
    [-0.53, 1.43, 0.52, 0.07, 0.13, 0.018],
    [0.73, 0.54, 0.43, 0.03, 0.47, 0.011],
    [0.29, 0.73, 0.52, 0.68, 0.39, 0.01],
    [-0.66, 0.92, 0.24, 0.97, 0.67, 0.014],
    [0.38, 0.55, 0.08, 0.54, 0.41, 0.019],
    [0.34, 1.21, 0.18, 0.99, 0.14, 0.012],
];

const PATTERN_10: &[ObstacleRow] = &[
    [0.73, 1.16, 0.61, 0.11, 0.2, 0.017],
    [-0.55, 1.15, 0.84, 0.31, 0.96, 0.015],
    [-0.98, 1.24, 0.33, 0.64, 0.36, 0.011],
    [0.29, 0.92, 0.77, 0.0, 0.16, 0.012],
    [0.68, 0.76, 0.69, 0.74, 0.16, 0.016],
    [-0.36, 1.28, 0.23, 0.16, 0.98, 0.015],
    [0.74, 0.84, 0.52, 0.68, 0.11, 0.014],
    [0.13, 1.37, 0.82, 0.41, 0.15, 0.018],
    [0.46, 0.84, 0.99, 0.49, 0.6, 0.01],
    [0.16, 0.94, 0.35, 0.86, 0.7, 0.014],
    [0.72, 1.27, 0.95, 0.44, 0.05, 0.012],
    [-0.12, 1.1, 0.63, 0.39, 0.35, 0.013],
];

const PATTERN_11: &[ObstacleRow] = &[
    [0.23, 0.71, 0.86, 0.65, 0.17, 0.014],
    [-0.1, 1.37, 0.93, 0.05, 0.56, 0.018],
    [-0.76, 1.42, 0.64, 0.27, 0.96, 0.014],
    [-0.73, 0.91, 0.7, 0.49, 0.13, 0.015],
    [-0.14, 1.12, 0.93, 0.98, 0.56, 0.018],
    [-0.25, 0.59, 0.21, 0.81, 0.82, 0.019],
    [0.42, 1.28, 0.67, 0.05, 0.01, 0.018],
    [0.69, 1.42, 0.22, 0.16, 0.14, 0.014],
    [-0.62, 1.28, 0.24, 0.16, 0.06, 0.018],
    [0.72, 1.23, 0.87, 0.64, 0.69, 0.012],
    [-0.81, 1.19, 0.53, 0.39, 0.54, 0.017],
    [-0.47, 1.0, 0.79, 0.56, 0.33, 0.013],
];

const PATTERN_12: &[ObstacleRow] = &[
    [-0.25, 1.02, 0.15, 0.12, 0.18, 0.011],
    [-0.52, 0.69, 0.63, 0.09, 0.87, 0.017],
    [0.92, 0.57, 0.81, 0.92, 0.47, 0.011],
    [-0.77, 1.4, 0.01, 0.91, 0.53, 0.019],
    [0.25, 0.52, 0.12, 0.09, 0.02, 0.013],
    [-0.64, 1.39, 0.2, 0.83, 0.59, 0.02],
    [0.21, 1.47, 0.62, 0.26, 0.46, 0.02],
    [0.7, 0.76, 0.81, 0.4, 0.11, 0.012],
    [-0.18, 1.48, 0.47, 0.45, 0.77, 0.018],
    [-0.49, 0.99, 0.42, 0.75, 0.81, 0.017],
    [0.2, 1.12, 0.48, 0.65, 0.59, 0.017],
    [-0.88, 1.45, 0.72, 0.46, 0.55, 0.016],
];

const PATTERN_13: &[ObstacleRow] = &[
    [0.05, 0.69, 0.01, 0.69, 0.89, 0.012],
    [-0.49, 0.66, 0.41, 0.78, 0.23, 0.019],
    [0.32, 1.1, 1.0, 0.02, 0.59, 0.019],
    [-0.09, 1.48, 0.48, 0.99, 0.4, 0.011],
    [0.01, 0.7, 0.33, 0.91, 0.83, 0.013],
    [-0.55, 1.28, 0.76, 0.06, 0.89, 0.01],
    [0.44, 1.16, 0.94, 0.32, 0.67, 0.015],
    [-0.6, 0.72, 0.94, 0.94, 0.12, 0.015],
    [0.54, 1.48, 0.9, 0.8, 0.07, 0.013],
    [0.37, 1.33, 0.34, 0.81, 0.19, 0.015],
    [-0.79, 0.75, 0.87, 0.45, 0.66, 0.011],
    [-0.61, 0.7, 0.19, 0.6, 0.72, 0.018],
];

const PATTERN_14: &[ObstacleRow] = &[
    [0.48, 1.05, 0.89, 0.4, 0.36, 0.015],
    [-0.71, 0.99, 0.82, 0.17, 0.02, 0.015],
    [-0.51, 1.26, 0.49, 0.18, 0.54, 0.014],
    [-0.79, 1.14, 0.41, 0.94, 0.8, 0.016],
    [0.55, 1.41, 0.8, 0.03, 0.79, 0.016],
    [0.88, 0.62, 0.37, 0.35, 0.1, 0.011],
    [0.83, 1.19, 0.27, 0.98, 0.87, 0.013],
    [0.21, 1.3, 0.3, 0.61, 0.71, 0.019],
    [-0.86, 1.1, 0.38, 0.3, 0.72, 0.014],
    [-0.54, 1.27, 0.61, 0.56, 0.22, 0.014],
    [0.91, 1.02, 0.8, 0.14, 0.7, 0.015],
    [0.7, 1.16, 0.72, 0.21, 0.86, 0.01],
];

const PATTERN_15: &[ObstacleRow] = &[
    [-0.53, 0.89, 0.27, 0.65, 0.25, 0.013],
    [0.61, 1.26, 0.89, 0.39, 0.21, 0.018],
    [0.57, 1.42, 0.34, 0.08, 0.67, 0.013],
    [-0.21, 1.0, 0.94, 0.11, 0.22, 0.014],
    [0.41, 0.69, 0.39, 0.51, 0.49, 0.012],
    [-0.71, 0.9, 0.73, 0.45, 0.52, 0.019],
    [-0.18, 0.68, 0.6, 0.7, 0.36, 0.011],
    [-0.61, 0.64, 0.37, 0.92, 0.57, 0.012],
    [-0.89, 0.91, 0.73, 0.74, 0.75, 0.015],
    [0.16, 1.07, 0.18, 0.94, 0.71, 0.017],
    [0.44, 1.15, 0.9, 0.46, 0.64, 0.012],
    [-0.82, 0.97, 0.95, 0.47, 0.22, 0.011],
];

const PATTERN_16: &[ObstacleRow] = &[
    [0.96, 0.89, 0.75, 0.14, 0.2, 0.01],
    [0.48, 1.22, 0.63, 0.73, 0.68, 0.018],
    [-0.33, 1.02, 0.66, 0.52, 0.89, 0.016],
    [-0.47, 0.99, 0.58, 0.57, 0.91, 0.019],
    [-0.95, 1.49, 0.04, 0.5, 0.69, 0.011],
    [-0.65, 1.42, 0.81, 0.86, 0.1, 0.017],
    [-0.09, 0.73, 0.44, 0.88, 0.4, 0.011],
    [0.86, 0.98, 0.57, 0.4, 0.7, 0.016],
    [-0.88, 1.11, 0.16, 0.87, 0.29, 0.014],
    [0.71, 1.06, 0.77, 0.46, 0.54, 0.019],
    [-0.5, 1.31, 0.52, 0.53, 0.86, 0.014],
    [0.41, 1.28, 0.21, 0.49, 0.91, 0.012],
];

const PATTERN_17: &[ObstacleRow] = &[
    [-0.52, 0.93, 0.03, 0.77, 0.77, 0.019],
    [0.66, 0.65, 0.04, 0.09, 0.4, 0.011],
    [-0.66, 1.11, 0.64, 0.58, 0.75, 0.017],
    [-0.34, 1.06, 0.55, 0.39, 0.05, 0.015],
    [0.34, 0.61, 0.07, 0.23, 0.33, 0.013],
    [0.56, 0.5, 0.59, 0.28, 0.65, 0.013],
    [-0.43, 1.21, 0.17, 0.37, 0.15, 0.012],
    [0.45, 1.34, 0.45, 0.32, 0.35, 0.012],
    [-0.19, 0.59, 0.65, 0.31, 0.66, 0.016],
    [0.13, 0.93, 0.87, 0.19, 0.94, 0.012],
    [-0.76, 1.02, 0.02, 0.89, 0.58, 0.011],
    [0.96, 0.88, 0.35, 0.43, 0.0, 0.012],
];

const PATTERN_18: &[ObstacleRow] = &[
    [-0.33, 1.14, 0.88, 0.6, 0.49, 0.02],
    [0.93, 1.38, 0.53, 0.8, 0.29, 0.017],
    [0.45, 0.93, 0.62, 0.25, 0.32, 0.011],
    [-0.73, 1.46, 0.24, 0.87, 0.57, 0.012],
    [0.19, 1.09, 0.95, 0.0, 0.62, 0.01],
    [-0.91, 0.84, 0.14, 0.91, 0.77, 0.019],
    [0.61, 0.67, 0.74, 0.88, 0.84, 0.017],
    [-0.61, 1.14, 0.94, 0.57, 0.31, 0.011],
    [0.01, 0.64, 0.69, 0.63, 0.41, 0.015],
    [0.21, 1.3, 0.05, 0.59, 0.9, 0.018],
    [0.02, 1.11, 0.06, 0.03, 0.35, 0.012],
    [-0.98, 1.02, 0.57, 0.65, 0.58, 0.012],
];

const PATTERN_19: &[ObstacleRow] = &[
    [-0.88, 1.05, 0.01, 0.86, 0.97, 0.011],
    [0.62, 0.67, 0.39, 0.73, 0.52, 0.019],
    [-0.9, 1.45, 0.49, 0.63, 0.71, 0.019],
    [-0.27, 0.52, 0.19, 0.33, 0.81, 0.013],
    [0.95, 1.07, 0.48, 0.14, 0.22, 0.017],
    [-0.15, 1.11, 0.48, 0.29, 0.39, 0.013],
    [-0.19, 0.6, 0.31, 0.12, 0.03, 0.015],
    [-0.05, 0.8, 0.71, 0.12, 0.55, 0.017],
    [-0.48, 0.64, 0.67, 0.98, 0.52, 0.014],
    [0.43, 1.05, 0.54, 0.34, 0.95, 0.016],
    [-0.96, 1.45, 0.17, 0.98, 0.43, 0.018],
    [-0.7, 0.56, 0.47, 0.89, 0.14, 0.01],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let patterns = builtin_patterns();
        assert_eq!(patterns.len(), 20);
        assert!(patterns.iter().all(|p| p.len() == 12 || p.len() == 16));
        assert!(patterns.iter().all(|p| p.len() <= 24));
        assert_eq!(opening_wave().len(), 6);
    }

    #[test]
    fn test_obstacles_fall_and_stay_on_screen_horizontally() {
        for pattern in builtin_patterns().iter().chain(std::iter::once(&opening_wave())) {
            for ob in pattern.iter() {
                assert!(ob.fall_speed > 0.0);
                assert!(ob.pos.x.abs() <= 1.0);
                assert_eq!(ob.size, OBSTACLE_SIZE);
            }
        }
    }
}
