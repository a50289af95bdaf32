pub mod ofx;

pub mod prelude {
    pub use super::ofx::prelude::*;
}
