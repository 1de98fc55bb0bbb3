//! Application-wide constants

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
/// zxcvbn score (0..=4) a new password has to reach.
pub const MIN_PASSWORD_SCORE: u8 = 2;
pub const GENERATED_PASSWORD_LENGTH: usize = 10;
pub const MAX_USERNAME_ATTEMPTS: u32 = 1000;
pub const USERNAME_SEPARATOR: char = '.';
pub const SECONDS_PER_DAY: i64 = 86_400;
