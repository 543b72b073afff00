// sysexits.h codes used by the host
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATA_ERROR: i32 = 65;
pub const EXIT_IO_ERROR: i32 = 74;

pub const KEYWORDS_COUNT: usize = 16;
pub const BYTES_PER_TOKEN_ESTIMATE: usize = 4;

pub const PROMPT: &str = "> ";
