//! Per-cell record of which edit operations reached the optimum.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A small set of edit flags.
///
/// The empty set means the cell has not been computed yet. Boundary cells
/// carry [`EditSet::BLOCKED`]; derived cells carry every operation that tied
/// for the optimum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EditSet(u8);

impl EditSet {
    pub const NONE: EditSet = EditSet(0x00);
    pub const BLOCKED: EditSet = EditSet(0x01);
    pub const INSERTION: EditSet = EditSet(0x02);
    pub const DELETION: EditSet = EditSet(0x04);
    pub const SUBSTITUTION: EditSet = EditSet(0x08);
    pub const TRANSPOSITION: EditSet = EditSet(0x10);

    const NAMED: [(EditSet, &'static str); 5] = [
        (EditSet::BLOCKED, "blocked"),
        (EditSet::INSERTION, "ins"),
        (EditSet::DELETION, "del"),
        (EditSet::SUBSTITUTION, "sub"),
        (EditSet::TRANSPOSITION, "trans"),
    ];

    /// True when every flag of `other` is set in `self`.
    pub const fn contains(self, other: EditSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: EditSet) {
        self.0 |= other.0;
    }

    pub const fn is_populated(self) -> bool {
        self.0 != 0
    }

    pub const fn is_blocked(self) -> bool {
        self.contains(EditSet::BLOCKED)
    }

    /// Number of edit operations recorded, not counting `BLOCKED`.
    pub fn operation_count(self) -> u32 {
        (self.0 & !EditSet::BLOCKED.0).count_ones()
    }

    /// More than one operation reached the optimum.
    pub fn is_tie(self) -> bool {
        self.operation_count() > 1
    }

    /// The individual flags in this set.
    pub fn iter(self) -> impl Iterator<Item = EditSet> {
        Self::NAMED
            .into_iter()
            .map(|(flag, _)| flag)
            .filter(move |flag| self.contains(*flag))
    }
}

impl BitOr for EditSet {
    type Output = EditSet;

    fn bitor(self, rhs: EditSet) -> EditSet {
        EditSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for EditSet {
    fn bitor_assign(&mut self, rhs: EditSet) {
        self.insert(rhs);
    }
}

impl fmt::Display for EditSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_populated() {
            return write!(f, "-");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for EditSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EditSet({})", self)
    }
}
