//! # Carousel
//!
//! Index arithmetic for stepping through recommendations one at a time,
//! plus the mapping from an item's distance to the active item onto where
//! (and how large) it is drawn.
//!
//! ```text
//!   offset:   -2      -1        0        +1      +2
//!           hidden  [ left ] [ CENTER ] [ right ] hidden
//!                    scale 80   scale 100  scale 80
//! ```

/// Scale (percent of full card size) for the active item.
pub const CENTER_SCALE: u16 = 100;
/// Scale (percent of full card size) for the immediate neighbours.
pub const SIDE_SCALE: u16 = 80;

/// Advance with wraparound. `len == 0` leaves the index untouched.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    (index + 1) % len
}

/// Step back with wraparound. `len == 0` leaves the index untouched.
pub fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    (index + len - 1) % len
}

/// Horizontal slot an item occupies relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Center,
    Right,
}

/// Where an item is drawn. `slot` is `None` for items faded out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: Option<Slot>,
}

impl Placement {
    pub fn is_visible(&self) -> bool {
        self.slot.is_some()
    }

    pub fn scale(&self) -> u16 {
        match self.slot {
            Some(Slot::Center) => CENTER_SCALE,
            Some(Slot::Left | Slot::Right) => SIDE_SCALE,
            None => 0,
        }
    }
}

/// Placement of item `index` in a list of `len` when `active` is the
/// current item. Indices outside the list are never visible.
pub fn placement(index: usize, active: usize, len: usize) -> Placement {
    if index >= len {
        return Placement { slot: None };
    }
    let slot = match index as isize - active as isize {
        -1 => Some(Slot::Left),
        0 => Some(Slot::Center),
        1 => Some(Slot::Right),
        _ => None,
    };
    Placement { slot }
}

/// Indices of the visible items for a list of `len`, left to right.
pub fn visible(active: usize, len: usize) -> Vec<(usize, Placement)> {
    (0..len)
        .map(|i| (i, placement(i, active, len)))
        .filter(|(_, p)| p.is_visible())
        .collect()
}
