use std::ops::{Add, Neg};

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        // SAFETY: (num % 4) is between 0 and 3
        unsafe { std::mem::transmute(num % 4) }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs)
    }
}

impl Dir {
    /// Whether `other` is this direction or its 180° reverse
    pub fn same_axis_as(self, other: Self) -> bool {
        self == other || self == -other
    }
}

#[test]
fn test_dir_math() {
    use Dir::*;

    let test_plus = [(U, 1, R), (U, 2, D), (R, 3, U), (D, 4, D)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    let test_neg = [(U, D), (D, U), (L, R), (R, L)];

    for &(start, expect) in &test_neg {
        assert_eq!(-start, expect);
    }
}

#[test]
fn test_same_axis() {
    use Dir::*;

    assert!(U.same_axis_as(U));
    assert!(U.same_axis_as(D));
    assert!(L.same_axis_as(R));
    assert!(!U.same_axis_as(L));
    assert!(!R.same_axis_as(D));
}
