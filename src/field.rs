//! The eleven measurement slots of a frame design.
//!
//! [`Field::ALL`] lists them in wire order. The first five are the large
//! dimensions stored as 24-bit integers, the remaining six are material
//! thicknesses stored as 16-bit integers.

/// Width of a field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Big-endian 24-bit unsigned integer.
    U24,
    /// Big-endian 16-bit unsigned integer.
    U16,
}

impl Slot {
    /// Number of bytes the slot occupies.
    #[must_use]
    pub const fn byte_len(self) -> usize {
        match self {
            Self::U24 => 3,
            Self::U16 => 2,
        }
    }

    /// Largest tick count the slot can hold.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::U24 => 0x00FF_FFFF,
            Self::U16 => 0xFFFF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Height,
    Width,
    MatWidth,
    FrameWidth,
    FrameDepth,
    GlazingThickness,
    MatboardThickness,
    ArtworkThickness,
    BackingThickness,
    RabbetDepth,
    BladeWidth,
}

static BY_NAME: phf::Map<&'static str, Field> = phf::phf_map! {
    "artwork_height" => Field::Height,
    "artwork_width" => Field::Width,
    "mat_width" => Field::MatWidth,
    "frame_width" => Field::FrameWidth,
    "frame_depth" => Field::FrameDepth,
    "glazing_thickness" => Field::GlazingThickness,
    "matboard_thickness" => Field::MatboardThickness,
    "artwork_thickness" => Field::ArtworkThickness,
    "backing_thickness" => Field::BackingThickness,
    "rabbet_depth" => Field::RabbetDepth,
    "blade_width" => Field::BladeWidth,
};

impl Field {
    /// All fields in wire order.
    pub const ALL: [Self; 11] = [
        Self::Height,
        Self::Width,
        Self::MatWidth,
        Self::FrameWidth,
        Self::FrameDepth,
        Self::GlazingThickness,
        Self::MatboardThickness,
        Self::ArtworkThickness,
        Self::BackingThickness,
        Self::RabbetDepth,
        Self::BladeWidth,
    ];

    #[must_use]
    pub const fn slot(self) -> Slot {
        match self {
            Self::Height | Self::Width | Self::MatWidth | Self::FrameWidth | Self::FrameDepth => {
                Slot::U24
            }
            _ => Slot::U16,
        }
    }

    /// The key this field is persisted under in saved settings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Height => "artwork_height",
            Self::Width => "artwork_width",
            Self::MatWidth => "mat_width",
            Self::FrameWidth => "frame_width",
            Self::FrameDepth => "frame_depth",
            Self::GlazingThickness => "glazing_thickness",
            Self::MatboardThickness => "matboard_thickness",
            Self::ArtworkThickness => "artwork_thickness",
            Self::BackingThickness => "backing_thickness",
            Self::RabbetDepth => "rabbet_depth",
            Self::BladeWidth => "blade_width",
        }
    }

    /// Looks a field up by its persisted key.
    ///
    /// ```
    /// use framelink::Field;
    /// assert_eq!(Field::from_name("rabbet_depth"), Some(Field::RabbetDepth));
    /// assert_eq!(Field::from_name("include_mat"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}
