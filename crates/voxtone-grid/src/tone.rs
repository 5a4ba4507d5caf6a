/// Structural classification assigned to a voxel.
///
/// The numeric values are the cell values of a tagged grid and the indices
/// into a placement palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Tone {
    /// Empty space.
    Background = 0,
    /// Occupied, no structural role detected.
    Fill = 1,
    /// Part of a wall segment.
    Wall = 2,
    /// Part of a structural post.
    Pillar = 3,
}

impl Tone {
    /// Number of tones; a palette carries exactly this many entries.
    pub const COUNT: usize = 4;

    /// The tag value written into a tagged grid.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Maps a tag value back to its tone.
    pub fn from_value(value: u8) -> Option<Tone> {
        match value {
            0 => Some(Tone::Background),
            1 => Some(Tone::Fill),
            2 => Some(Tone::Wall),
            3 => Some(Tone::Pillar),
            _ => None,
        }
    }

    /// Glyph used by ASCII rendering.
    pub fn glyph(self) -> char {
        match self {
            Tone::Background => ' ',
            Tone::Fill => '#',
            Tone::Wall => '+',
            Tone::Pillar => 'O',
        }
    }
}
