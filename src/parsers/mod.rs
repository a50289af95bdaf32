pub mod pagseguro;
pub mod traits;

pub mod prelude {
    pub use super::pagseguro::prelude::*;
    pub use super::traits::Parser;
}
