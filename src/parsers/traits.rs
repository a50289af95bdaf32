use crate::errors::ConversionResult;

pub trait Parser {
    type Output;

    fn parse(content: &[u8]) -> ConversionResult<Vec<Self::Output>>;
}
