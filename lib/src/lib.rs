pub mod error;
pub mod filter;
pub mod frequency;
pub mod language;
pub mod lemma;
pub mod pipeline;
pub mod rank;
pub mod token;
pub mod tokenizer;
