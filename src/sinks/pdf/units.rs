use std::ops::{Add, Deref, Mul, Sub};

/// A length in PDF points (1/72 of an inch).
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Pt(pub f32);

/// A length in millimetres.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * 72.0 / 25.4)
    }
}

impl Deref for Pt {
    type Target = f32;

    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Add for Pt {
    type Output = Pt;

    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl Sub for Pt {
    type Output = Pt;

    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

pub mod pagesize {
    use super::{Mm, Pt};

    /// ISO A4 portrait, 210 × 297 mm
    pub fn a4() -> (Pt, Pt) {
        (Mm(210.0).into(), Mm(297.0).into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn converts_millimetres_to_points() {
        let margin: Pt = Mm(20.0).into();
        assert!((*margin - 56.692_91).abs() < 0.001);
    }

    #[test]
    fn a4_is_the_usual_size() {
        let (w, h) = pagesize::a4();
        assert!((*w - 595.2756).abs() < 0.01);
        assert!((*h - 841.8898).abs() < 0.01);
    }
}
