mod tag;

mod error;
pub use error::{Error, Result};

mod pack;
pub use pack::pack;

mod unpack;
pub use unpack::unpack;

mod reader;
pub use reader::Reader;

/// Number of bytes in an unpacked word. All unpacked data is a whole number of
/// words; the packer rejects anything else.
pub const WORD_SIZE: usize = 8;

/// The most words a single zero-word run or literal run can cover. A longer
/// stretch is encoded as consecutive runs.
pub const MAX_RUN_WORDS: usize = 256;
