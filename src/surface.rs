//! Display geometry: the visible size and the memory-access orientation that
//! produces it.

/// MADCTL flag bits.
pub mod madctl {
    pub const MY: u8 = 0x80;
    pub const MX: u8 = 0x40;
    pub const MV: u8 = 0x20;
    pub const ML: u8 = 0x10;
    pub const RGB: u8 = 0x00;
    pub const BGR: u8 = 0x08;
    pub const MH: u8 = 0x04;
}

/// Panel rotation, expressed as a memory-access-control flag combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    PortraitFlipped,
    LandscapeFlipped,
}

impl Orientation {
    /// The MADCTL parameter byte selecting this rotation.
    pub const fn madctl(self) -> u8 {
        use self::madctl::*;
        match self {
            Orientation::Portrait => MX | BGR,
            Orientation::Landscape => MV | BGR,
            Orientation::PortraitFlipped => MY | BGR,
            Orientation::LandscapeFlipped => MX | MY | MV | BGR,
        }
    }

    /// Landscape rotations exchange rows and columns (MV set).
    pub const fn is_landscape(self) -> bool {
        matches!(
            self,
            Orientation::Landscape | Orientation::LandscapeFlipped
        )
    }
}

///
/// Width, height and orientation of the drawing surface.
///
/// The three only ever change together through [`Surface::set_orientation`],
/// so the dimensions always describe the current rotation.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Surface {
    width: u16,
    height: u16,
    orientation: Orientation,
}

impl Surface {
    ///
    /// Creates a surface description
    ///
    /// # Arguments
    ///
    /// * `width` - visible width in pixels for `orientation`
    /// * `height` - visible height in pixels for `orientation`
    /// * `orientation` - rotation the dimensions were given for
    ///
    pub const fn new(width: u16, height: u16, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            orientation,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Switches rotation, swapping width and height when moving between the
    /// portrait and landscape groups.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation.is_landscape() != orientation.is_landscape() {
            core::mem::swap(&mut self.width, &mut self.height);
        }
        self.orientation = orientation;
    }

    pub(crate) fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::PortraitFlipped,
        Orientation::LandscapeFlipped,
    ];

    #[test]
    fn madctl_flags() {
        assert_eq!(Orientation::Portrait.madctl(), 0x48);
        assert_eq!(Orientation::Landscape.madctl(), 0x28);
        assert_eq!(Orientation::PortraitFlipped.madctl(), 0x88);
        assert_eq!(Orientation::LandscapeFlipped.madctl(), 0xE8);
    }

    #[test]
    fn four_rotations_restore_dimensions() {
        let mut surface = Surface::new(240, 320, Orientation::Portrait);
        for orientation in ALL.iter().cycle().skip(1).take(4) {
            surface.set_orientation(*orientation);
        }
        assert_eq!(surface.orientation(), Orientation::Portrait);
        assert_eq!((surface.width(), surface.height()), (240, 320));
    }

    #[test]
    fn crossing_groups_swaps_dimensions() {
        let mut surface = Surface::new(240, 320, Orientation::Portrait);
        surface.set_orientation(Orientation::LandscapeFlipped);
        assert_eq!((surface.width(), surface.height()), (320, 240));
        surface.set_orientation(Orientation::Landscape);
        assert_eq!((surface.width(), surface.height()), (320, 240));
        surface.set_orientation(Orientation::PortraitFlipped);
        assert_eq!((surface.width(), surface.height()), (240, 320));
    }

    #[test]
    fn same_group_is_a_no_op_on_dimensions() {
        for start in ALL.iter() {
            let mut surface = Surface::new(240, 320, *start);
            let partner = ALL
                .iter()
                .find(|o| *o != start && o.is_landscape() == start.is_landscape())
                .copied()
                .unwrap();
            surface.set_orientation(partner);
            surface.set_orientation(*start);
            assert_eq!((surface.width(), surface.height()), (240, 320));
        }
    }

    #[test]
    fn default_orientation_is_portrait() {
        assert_eq!(Orientation::default(), Orientation::Portrait);
        assert_eq!(Orientation::default().madctl(), 0x48);
    }

    #[test]
    fn contains_is_half_open() {
        let surface = Surface::new(320, 240, Orientation::Landscape);
        assert!(surface.contains(0, 0));
        assert!(surface.contains(319, 239));
        assert!(!surface.contains(320, 0));
        assert!(!surface.contains(0, 240));
        assert!(!surface.contains(-1, 5));
    }
}
