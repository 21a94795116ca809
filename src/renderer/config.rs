//! Configuration for SVG rendering

/// Configuration options for tile SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Edge length of the square tile, in user units
    pub tile_size: u32,

    /// Spacing of the alignment grid
    pub grid_spacing: u32,

    /// Whether to format output with one element per line
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            tile_size: 40,
            grid_spacing: 10,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the grid spacing
    pub fn with_grid_spacing(mut self, spacing: u32) -> Self {
        self.grid_spacing = spacing;
        self
    }

    /// Centre of the tile, the pivot for rotated variants
    pub fn center(&self) -> (f64, f64) {
        let half = f64::from(self.tile_size) / 2.0;
        (half, half)
    }

    /// Interior grid line offsets (10, 20, 30 for a 40-unit tile)
    pub fn grid_offsets(&self) -> Vec<u32> {
        if self.grid_spacing == 0 {
            return Vec::new();
        }
        (1..)
            .map(|i| i * self.grid_spacing)
            .take_while(|offset| *offset < self.tile_size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.tile_size, 40);
        assert_eq!(config.grid_spacing, 10);
        assert!(config.pretty_print);
        assert_eq!(config.center(), (20.0, 20.0));
        assert_eq!(config.grid_offsets(), vec![10, 20, 30]);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_pretty_print(false)
            .with_grid_spacing(20);

        assert!(!config.pretty_print);
        assert_eq!(config.grid_offsets(), vec![20]);
    }

    #[test]
    fn test_zero_spacing_has_no_grid() {
        let config = SvgConfig::new().with_grid_spacing(0);
        assert!(config.grid_offsets().is_empty());
    }
}
