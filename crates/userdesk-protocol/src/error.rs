use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("timestamp out of range: {seconds} seconds, {nanos} nanoseconds")]
    TimestampOutOfRange { seconds: i64, nanos: i32 },
}
