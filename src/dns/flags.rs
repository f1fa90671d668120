//! Resolution option bits carried by a query's hints.

use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// Bitmask of resolution options.
///
/// Bit values are the POSIX `AI_*` values, which Linux, the BSDs, macOS and
/// Windows all agree on for the three recognized options. Bits outside those
/// three are kept as-is; whether they mean anything is up to the resolver.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolverFlags(i32);

impl ResolverFlags {
    /// No options.
    pub const NONE: Self = Self(0);
    /// The endpoint is meant for a locally bound (listening) socket.
    pub const PASSIVE: Self = Self(0x01);
    /// Also determine the canonical name of the host.
    pub const CANONICAL_NAME: Self = Self(0x02);
    /// The host is a numeric address literal; do not look it up.
    pub const NUMERIC_HOST: Self = Self(0x04);

    const KNOWN: [(Self, &'static str); 3] = [
        (Self::PASSIVE, "PASSIVE"),
        (Self::CANONICAL_NAME, "CANONICAL_NAME"),
        (Self::NUMERIC_HOST, "NUMERIC_HOST"),
    ];

    const RECOGNIZED_BITS: i32 = 0x01 | 0x02 | 0x04;

    pub const fn empty() -> Self {
        Self::NONE
    }

    /// Build from raw bits, keeping any unrecognized ones.
    pub const fn from_bits_retain(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share any bit.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Only the bits this crate knows about.
    pub const fn recognized(self) -> Self {
        Self(self.0 & Self::RECOGNIZED_BITS)
    }

    /// Only the bits this crate does not know about.
    pub const fn unrecognized(self) -> Self {
        Self(self.0 & !Self::RECOGNIZED_BITS)
    }
}

impl ops::BitOr for ResolverFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for ResolverFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for ResolverFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<ResolverFlags> for i32 {
    fn from(flags: ResolverFlags) -> Self {
        flags.0
    }
}

impl fmt::Display for ResolverFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }

        let mut parts: Vec<String> = Self::KNOWN
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| (*name).to_string())
            .collect();

        let rest = self.unrecognized();
        if !rest.is_empty() {
            parts.push(format!("{:#x}", rest.0));
        }
        f.write_str(&parts.join(" | "))
    }
}

impl fmt::Debug for ResolverFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolverFlags({self})")
    }
}
