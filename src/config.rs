//! The in-memory frame design.
//!
//! ```
//! use framelink::{Field, FrameConfiguration, Ticks};
//! let mut config = FrameConfiguration::default();
//! config.set_inches(Field::Height, 10.0).unwrap();
//! assert_eq!(config.get(Field::Height), Ticks::new(100_000));
//! assert!(config.set_inches(Field::Width, -1.0).is_err());
//! ```

use crate::error::RangeError;
use crate::field::Field;
use crate::flags::Flags;
use crate::ticks::{InvalidTicks, Ticks};
use crate::units::Unit;

/// A complete frame design: eleven measurements and two switches.
///
/// Measurements are always canonical inch ticks. `unit_is_millimeters` only
/// records which unit the originating interface displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameConfiguration {
    pub height: Ticks,
    pub width: Ticks,
    pub mat_width: Ticks,
    pub frame_width: Ticks,
    pub frame_depth: Ticks,
    pub glazing_thickness: Ticks,
    pub matboard_thickness: Ticks,
    pub artwork_thickness: Ticks,
    pub backing_thickness: Ticks,
    pub rabbet_depth: Ticks,
    pub blade_width: Ticks,
    pub include_mat: bool,
    pub unit_is_millimeters: bool,
}

impl Default for FrameConfiguration {
    fn default() -> Self {
        Self {
            height: Ticks::new(125_000),
            width: Ticks::new(187_500),
            mat_width: Ticks::new(20_000),
            frame_width: Ticks::new(7_500),
            frame_depth: Ticks::new(7_500),
            glazing_thickness: Ticks::new(930),
            matboard_thickness: Ticks::new(550),
            artwork_thickness: Ticks::new(80),
            backing_thickness: Ticks::new(1_250),
            rabbet_depth: Ticks::new(3_750),
            blade_width: Ticks::new(1_250),
            include_mat: true,
            unit_is_millimeters: false,
        }
    }
}

impl FrameConfiguration {
    #[must_use]
    pub const fn get(&self, field: Field) -> Ticks {
        match field {
            Field::Height => self.height,
            Field::Width => self.width,
            Field::MatWidth => self.mat_width,
            Field::FrameWidth => self.frame_width,
            Field::FrameDepth => self.frame_depth,
            Field::GlazingThickness => self.glazing_thickness,
            Field::MatboardThickness => self.matboard_thickness,
            Field::ArtworkThickness => self.artwork_thickness,
            Field::BackingThickness => self.backing_thickness,
            Field::RabbetDepth => self.rabbet_depth,
            Field::BladeWidth => self.blade_width,
        }
    }

    pub fn set(&mut self, field: Field, ticks: Ticks) {
        let slot = match field {
            Field::Height => &mut self.height,
            Field::Width => &mut self.width,
            Field::MatWidth => &mut self.mat_width,
            Field::FrameWidth => &mut self.frame_width,
            Field::FrameDepth => &mut self.frame_depth,
            Field::GlazingThickness => &mut self.glazing_thickness,
            Field::MatboardThickness => &mut self.matboard_thickness,
            Field::ArtworkThickness => &mut self.artwork_thickness,
            Field::BackingThickness => &mut self.backing_thickness,
            Field::RabbetDepth => &mut self.rabbet_depth,
            Field::BladeWidth => &mut self.blade_width,
        };
        *slot = ticks;
    }

    /// Sets a field from a decimal inch value, rounding to the nearest tick.
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::InvalidMeasurement`] for negative or
    /// non-finite values and with [`RangeError::OutOfRange`] for values too
    /// large to count.
    pub fn set_inches(&mut self, field: Field, inches: f64) -> Result<(), RangeError> {
        self.set_in_unit(field, inches, Unit::Inches)
    }

    /// Sets a field from a value displayed in `unit`. The stored value is
    /// still inch ticks.
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::InvalidMeasurement`] for negative or
    /// non-finite values and with [`RangeError::OutOfRange`] for values too
    /// large to count.
    pub fn set_in_unit(&mut self, field: Field, value: f64, unit: Unit) -> Result<(), RangeError> {
        let ticks = Ticks::from_unit(value, unit).map_err(|err| range_error(field, err))?;
        self.set(field, ticks);
        Ok(())
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        Flags::new(self.include_mat, self.unit_is_millimeters)
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.include_mat = flags.include_mat();
        self.unit_is_millimeters = flags.unit_is_millimeters();
    }

    /// The unit the originating interface displayed.
    #[must_use]
    pub const fn display_unit(&self) -> Unit {
        if self.unit_is_millimeters {
            Unit::Millimeters
        } else {
            Unit::Inches
        }
    }

    /// A field's value converted to [`FrameConfiguration::display_unit`].
    #[must_use]
    pub fn display_value(&self, field: Field) -> f64 {
        self.get(field).in_unit(self.display_unit())
    }

    /// Checks every field against the width of its wire slot.
    ///
    /// # Errors
    ///
    /// Returns the first field, in wire order, whose tick count does not fit.
    pub fn validate(&self) -> Result<(), RangeError> {
        for field in Field::ALL {
            let ticks = self.get(field).count();
            let max = field.slot().max();
            if ticks > max {
                return Err(RangeError::OutOfRange { field, ticks, max });
            }
        }
        Ok(())
    }

    /// Builds a configuration from persisted settings.
    ///
    /// Keys are the names returned by [`Field::name`] plus `include_mat`.
    /// Values are decimal inches (`true`/`false` for `include_mat`). Missing
    /// keys keep their default and unknown keys are ignored.
    ///
    /// ```
    /// use framelink::{Field, FrameConfiguration};
    /// let config = FrameConfiguration::from_settings([
    ///     ("artwork_height", "10"),
    ///     ("include_mat", "false"),
    ///     ("theme", "dark"),
    /// ])
    /// .unwrap();
    /// assert_eq!(config.get(Field::Height).inches(), 10.0);
    /// assert!(!config.include_mat);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::InvalidMeasurement`] when a known measurement
    /// key holds something other than a nonnegative number, and with
    /// [`RangeError::OutOfRange`] when it is too large to count. An
    /// unparsable `include_mat` keeps its default.
    pub fn from_settings<'a, I>(settings: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in settings {
            if key == "include_mat" {
                match value.trim() {
                    "true" => config.include_mat = true,
                    "false" => config.include_mat = false,
                    _ => {}
                }
                continue;
            }
            let Some(field) = Field::from_name(key) else {
                continue;
            };
            let ticks = value
                .parse::<Ticks>()
                .map_err(|err| range_error(field, err))?;
            config.set(field, ticks);
        }
        Ok(config)
    }
}

// Overflow reports the saturated count against the field's wire limit.
fn range_error(field: Field, err: InvalidTicks) -> RangeError {
    match err {
        InvalidTicks::NotAMeasurement => RangeError::InvalidMeasurement { field },
        InvalidTicks::TooLarge => RangeError::OutOfRange {
            field,
            ticks: u32::MAX,
            max: field.slot().max(),
        },
    }
}
