mod extract;
pub use extract::*;
pub mod normalize;
pub mod note;
pub mod soundfont;
pub mod writer;
