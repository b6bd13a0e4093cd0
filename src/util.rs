pub use num_traits::{Float, Num, One, Zero};

/// Element types the stencil machinery works over.
pub trait NumTrait: Num + Copy {}
impl<T: Num + Copy> NumTrait for T {}
