//! A generated palette together with its display selection.
//!
//! [`Palette`] is the state a presentation layer keeps between user actions:
//! the current base color, the schemes generated from it and which scheme
//! is on screen. Changing the base regenerates; changing the active scheme
//! only re-slices.

use crate::config::Config;
use crate::error::Result;
use crate::export::{css_root_block, grid_variables, hex_values, lch_values};
use crate::scheme::{generate_from_input, ColorSchemes, SchemeModel};
use crate::select::{grid_items, ActiveScheme, GridItem, DEFAULT_LIMIT};

/// Generated schemes plus the active selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    input: String,
    model: SchemeModel,
    schemes: ColorSchemes,
    active: ActiveScheme,
    limit: usize,
}

impl Palette {
    /// Generate from `input` with the LCH model, `split` active and a
    /// 12-swatch grid.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            model: SchemeModel::default(),
            schemes: generate_from_input(input, SchemeModel::default()),
            active: ActiveScheme::default(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Build from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(&config.base_color)
            .with_model(config.model)
            .with_active(config.active()?)
            .with_limit(config.grid_limit))
    }

    /// Switch the model, regenerating the schemes.
    #[must_use]
    pub fn with_model(mut self, model: SchemeModel) -> Self {
        if model != self.model {
            self.model = model;
            self.schemes = generate_from_input(&self.input, model);
        }
        self
    }

    /// Set the active scheme.
    #[must_use]
    pub fn with_active(mut self, active: ActiveScheme) -> Self {
        self.active = active;
        self
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the base color and regenerate.
    pub fn set_base(&mut self, input: &str) {
        self.input = input.to_string();
        self.schemes = generate_from_input(input, self.model);
    }

    /// Show a different scheme. Does not regenerate.
    pub fn set_active(&mut self, active: ActiveScheme) {
        self.active = active;
    }

    /// The base color string as given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Model in use.
    #[must_use]
    pub const fn model(&self) -> SchemeModel {
        self.model
    }

    /// All generated schemes.
    #[must_use]
    pub const fn schemes(&self) -> &ColorSchemes {
        &self.schemes
    }

    /// Scheme on screen.
    #[must_use]
    pub const fn active(&self) -> ActiveScheme {
        self.active
    }

    /// Grid size.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Swatches for the active scheme.
    #[must_use]
    pub fn grid(&self) -> Vec<GridItem> {
        grid_items(&self.schemes, self.active, self.limit)
    }

    /// `:root { ... }` block for the current grid.
    #[must_use]
    pub fn css_variables(&self) -> String {
        css_root_block(&grid_variables(&self.grid()))
    }

    /// Comma-separated hex values of the current grid.
    #[must_use]
    pub fn hex_values(&self) -> String {
        hex_values(&self.grid())
    }

    /// `LCH(l, c, h)` labels of the current grid, one per line.
    #[must_use]
    pub fn lch_values(&self) -> String {
        lch_values(&self.grid())
    }
}
