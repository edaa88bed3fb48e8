//! Length units used throughout layout.
//!
//! All layout happens in device units ([Px]), the unit of the generated SVG
//! user space. Paper sizes are specified in points and converted at the same
//! fixed ratio of [PX_PER_PT].

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Device pixels per typographic point
pub const PX_PER_PT: f32 = 1.333;

/// A length in device units. Positive y points down the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Px(pub f32);

/// A length in typographic points (1/72 in)
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
pub struct Mm(pub f32);

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl From<Pt> for Px {
    fn from(pt: Pt) -> Px {
        Px(pt.0 * PX_PER_PT)
    }
}

impl From<In> for Pt {
    fn from(i: In) -> Pt {
        Pt(i.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * 72.0 / 25.4)
    }
}

impl From<In> for Px {
    fn from(i: In) -> Px {
        Pt::from(i).into()
    }
}

impl From<Mm> for Px {
    fn from(mm: Mm) -> Px {
        Pt::from(mm).into()
    }
}

impl Px {
    /// Whether this is a finite (not NaN, not infinite) value
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}
