//! Obstacle patterns and the catalog they are drawn from
//!
//! The catalog owns every pattern; the active one is tracked by index so
//! switching patterns never copies or aliases obstacle data.

use std::fmt;

use rand::Rng;

use super::obstacle::Obstacle;

/// A fixed group of obstacles advanced as a unit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern {
    pub obstacles: Vec<Obstacle>,
}

impl Pattern {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    /// Advance every obstacle by one tick
    pub fn advance(&mut self, speed_multiplier: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed_multiplier);
        }
    }

    /// True iff every obstacle has fallen to or below `line`
    pub fn is_complete(&self, line: f32) -> bool {
        self.obstacles.iter().all(|o| o.is_below(line))
    }

    /// Put every obstacle back at the spawn height
    pub fn reset(&mut self, spawn_height: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.pos.y = spawn_height;
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

/// Error building a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog needs at least one pattern to select from
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "pattern catalog must contain at least one pattern"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// All patterns plus the index of the active one
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
    active: usize,
}

impl PatternCatalog {
    /// Build a catalog; the first pattern starts active at its authored heights
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, CatalogError> {
        if patterns.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { patterns, active: 0 })
    }

    /// The authored catalog (never empty)
    pub fn builtin() -> Self {
        Self {
            patterns: super::catalog::builtin_patterns(),
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Pattern {
        &self.patterns[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Pattern {
        &mut self.patterns[self.active]
    }

    /// Pick the next active pattern uniformly at random (repeats allowed)
    /// and reset its obstacles to the spawn height. Returns the new index.
    pub fn select_next<R: Rng + ?Sized>(&mut self, rng: &mut R, spawn_height: f32) -> usize {
        self.active = rng.random_range(0..self.patterns.len());
        self.patterns[self.active].reset(spawn_height);
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn column(ys: &[f32]) -> Pattern {
        Pattern::new(
            ys.iter()
                .map(|&y| Obstacle::new(0.0, y, 0.05, [1.0; 3], 0.01))
                .collect(),
        )
    }

    #[test]
    fn test_is_complete_requires_every_obstacle() {
        let mut pattern = column(&[-1.0, -1.5, -2.0]);
        assert!(pattern.is_complete(-1.0));

        pattern.obstacles[1].pos.y = -0.99;
        assert!(!pattern.is_complete(-1.0));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(PatternCatalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_single_pattern_catalog_reselects_itself() {
        let mut catalog = PatternCatalog::new(vec![column(&[-3.0, -4.0])]).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..5 {
            assert_eq!(catalog.select_next(&mut rng, 1.0), 0);
        }
        assert!(catalog.active().iter().all(|o| o.pos.y == 1.0));
    }

    #[test]
    fn test_select_next_resets_only_chosen_pattern() {
        let patterns = vec![column(&[-2.0]), column(&[-2.0]), column(&[-2.0])];
        let mut catalog = PatternCatalog::new(patterns).unwrap();
        let mut rng = Pcg32::seed_from_u64(42);

        let chosen = catalog.select_next(&mut rng, 1.0);
        assert_eq!(catalog.active_index(), chosen);
        for i in 0..catalog.len() {
            let y = catalog.patterns[i].obstacles[0].pos.y;
            if i == chosen {
                assert_eq!(y, 1.0);
            } else {
                assert_eq!(y, -2.0);
            }
        }
    }

    #[test]
    fn test_selection_is_seeded() {
        let patterns: Vec<Pattern> = (0..8).map(|_| column(&[0.0])).collect();
        let mut a = PatternCatalog::new(patterns.clone()).unwrap();
        let mut b = PatternCatalog::new(patterns).unwrap();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);

        let picks_a: Vec<usize> = (0..16).map(|_| a.select_next(&mut rng_a, 1.0)).collect();
        let picks_b: Vec<usize> = (0..16).map(|_| b.select_next(&mut rng_b, 1.0)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 8));
    }
}
