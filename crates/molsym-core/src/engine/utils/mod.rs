pub mod candidates;
pub mod matching;
