//! Constants for decoding fixed-point and timestamp values.

/// Divisor turning a raw `int16` into a 2.14 fixed-point number (2^14)
pub const SHORT_FRAC_SCALE: f64 = 16384.0;

/// Divisor turning a raw `int32` into a 16.16 fixed-point number (2^16)
pub const FIXED_SCALE: f64 = 65536.0;

/// Seconds between 1904-01-01T00:00:00Z and the Unix epoch 1970-01-01T00:00:00Z
pub const LONG_DATE_TIME_EPOCH_OFFSET: i64 = 2_082_844_800;
