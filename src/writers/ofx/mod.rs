mod template;
mod writer;

pub mod prelude {
    pub use super::writer::OfxWriter;
}
