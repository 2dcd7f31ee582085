mod scanner;
mod source;
mod token;

pub use scanner::Tokenizer;
pub use source::Source;
pub use token::{Token, TokenType};
