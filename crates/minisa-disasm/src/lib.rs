pub mod model;

pub use model::{disassemble, load_raw_bin, parse_word, Line};
