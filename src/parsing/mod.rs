
//! Tokenization and infix-to-postfix conversion.

pub mod operator;
pub mod shunting_yard;
pub mod token;
pub mod tokenizer;

pub use token::Token;
pub use tokenizer::tokenize;
