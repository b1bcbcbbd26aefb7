#[cfg(feature = "std")]
pub trait SlideKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> SlideKey for T {}

#[cfg(not(feature = "std"))]
pub trait SlideKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> SlideKey for T {}
