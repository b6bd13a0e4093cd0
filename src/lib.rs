pub mod box_filter;
pub mod stencil;
pub mod util;
