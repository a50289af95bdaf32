mod dto;
mod parser;
mod types;

pub mod prelude {
    pub use super::dto::PagseguroRow;
    pub use super::parser::PagseguroParser;
    pub use super::types::{BrDateTime, BrValue};
}
