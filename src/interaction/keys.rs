use bitflags::bitflags;

bitflags! {
    /// Modifier/button codes as a small bit-set.
    ///
    /// The wire values match the host contract: secondary = 0b001,
    /// primary = 0b010, middle = 0b100; secondary+primary form a combined
    /// code for the pan chord.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u32 {
        const SECONDARY = 0b001;
        const PRIMARY = 0b010;
        const SECONDARY_PRIMARY = 0b011;
        const MIDDLE = 0b100;
    }
}

/// Interaction mode derived from the currently-held mask.
///
/// The bindings are policy, not mechanism: orbit is exactly the middle
/// button, pan exactly the secondary+primary chord. Any other mask,
/// including an empty one, is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Orbiting,
    Panning,
}

impl InteractionMode {
    #[must_use]
    pub fn from_mask(mask: ModifierMask) -> Self {
        if mask == ModifierMask::MIDDLE {
            Self::Orbiting
        } else if mask == ModifierMask::SECONDARY_PRIMARY {
            Self::Panning
        } else {
            Self::Idle
        }
    }
}
