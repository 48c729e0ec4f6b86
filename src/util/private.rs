use faststr::FastStr;

use crate::Segment;

// Prevent users from implementing the trait in anyvalue.
pub trait Sealed {}
impl Sealed for usize {}
impl Sealed for str {}
impl Sealed for std::string::String {}
impl Sealed for FastStr {}
impl Sealed for Segment {}
impl<'a, T> Sealed for &'a T where T: ?Sized + Sealed {}
