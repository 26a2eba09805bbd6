// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use self::Type::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

///////////////////////////////////////////////////////////////////////////////////////////////
/// Datatypes
///////////////////////////////////////////////////////////////////////////////////////////////

/// The value categories of the IR. Every expression carries exactly one of these, computed by
/// its constructor. Two types are equal iff the tag and (where the tag has one) the width match.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Type {
    /// Fixed width bit-vector with wraparound arithmetic, e.g. `bv32`
    Bv { width: u64 },
    /// Single bit boolean
    Bool,
    /// IEEE floating point of the given width (32 or 64 in practice)
    Float { width: u64 },
    /// The identity of an array (a global, a local allocation, or an unknown one)
    ArrayId,
    /// A `(array id, offset)` pair whose offset is a bit-vector of `width` bits
    Pointer { width: u64 },
}

///////////////////////////////////////////////////////////////////////////////////////////////
/// Implementations
///////////////////////////////////////////////////////////////////////////////////////////////

/// Constructors
impl Type {
    pub fn bv(width: u64) -> Self {
        assert!(width > 0, "Bit-vector type must have a non-zero width");
        Bv { width }
    }

    pub fn bool() -> Self {
        Bool
    }

    pub fn float(width: u64) -> Self {
        assert!(width > 0, "Float type must have a non-zero width");
        Float { width }
    }

    pub fn array_id() -> Self {
        ArrayId
    }

    pub fn pointer(width: u64) -> Self {
        assert!(width > 0, "Pointer type must have a non-zero width");
        Pointer { width }
    }
}

/// Getters
impl Type {
    /// The width in bits, for the tags that have one.
    pub fn width(&self) -> Option<u64> {
        match self {
            Bv { width } | Float { width } | Pointer { width } => Some(*width),
            Bool | ArrayId => None,
        }
    }

    /// The width of a type already known to carry one.
    /// Callers check the tag first; asking a `Bool` or `ArrayId` for its width is a bug.
    pub fn expect_width(&self) -> u64 {
        match self.width() {
            Some(width) => width,
            None => unreachable!("Type {self:?} has no width"),
        }
    }
}

/// Predicates
impl Type {
    pub fn is_bv(&self) -> bool {
        matches!(self, Bv { .. })
    }

    /// `bv<width>` for exactly this width
    pub fn is_bv_of_width(&self, w: u64) -> bool {
        match self {
            Bv { width } => *width == w,
            _ => false,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Bool)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Float { .. })
    }

    pub fn is_array_id(&self) -> bool {
        matches!(self, ArrayId)
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Pointer { .. })
    }

    /// Bit-vectors and floats: the types arithmetic applies to.
    pub fn is_numeric(&self) -> bool {
        match self {
            Bv { .. } | Float { .. } => true,
            Bool | ArrayId | Pointer { .. } => false,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bv { width } => write!(f, "bv{width}"),
            Bool => write!(f, "bool"),
            Float { width } => write!(f, "float{width}"),
            ArrayId => write!(f, "arrayId"),
            Pointer { width } => write!(f, "ptr{width}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Type;
    use serde_test::{Token, assert_tokens};

    #[test]
    fn equality_uses_tag_and_width() {
        assert_eq!(Type::bv(32), Type::bv(32));
        assert_ne!(Type::bv(32), Type::bv(64));
        assert_ne!(Type::bv(32), Type::float(32));
        assert_ne!(Type::bv(32), Type::pointer(32));
        assert_eq!(Type::bool(), Type::Bool);
        assert_ne!(Type::bool(), Type::array_id());
    }

    #[test]
    fn widths_and_predicates() {
        assert_eq!(Type::pointer(64).width(), Some(64));
        assert_eq!(Type::array_id().width(), None);
        assert_eq!(Type::bool().width(), None);
        assert!(Type::bv(8).is_bv_of_width(8));
        assert!(!Type::bv(8).is_bv_of_width(16));
        assert!(Type::float(64).is_numeric());
        assert!(Type::bv(1).is_numeric());
        assert!(!Type::pointer(32).is_numeric());
        assert!(Type::pointer(32).is_pointer());
        assert!(Type::array_id().is_array_id());
    }

    #[test]
    #[should_panic(expected = "non-zero width")]
    fn zero_width_bv() {
        Type::bv(0);
    }

    #[test]
    #[should_panic(expected = "has no width")]
    fn expect_width_of_bool() {
        Type::bool().expect_width();
    }

    #[test]
    fn display() {
        assert_eq!(Type::bv(8).to_string(), "bv8");
        assert_eq!(Type::pointer(32).to_string(), "ptr32");
        assert_eq!(Type::float(64).to_string(), "float64");
    }

    #[test]
    fn serialize() {
        assert_tokens(
            &Type::bv(32),
            &[
                Token::StructVariant { name: "Type", variant: "Bv", len: 1 },
                Token::Str("width"),
                Token::U64(32),
                Token::StructVariantEnd,
            ],
        );
        assert_tokens(&Type::ArrayId, &[Token::UnitVariant { name: "Type", variant: "ArrayId" }]);
    }
}
