//! Instants as they arrive from the user service.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::Error;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// An instant on the wire: whole seconds since the Unix epoch plus a non-negative
/// nanosecond adjustment, matching the schema's `google.protobuf.Timestamp`.
///
/// Values are produced by the decoding layer. Consumers only read them, converting to a
/// [`jiff::Timestamp`] with [`WireTimestamp::to_timestamp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireTimestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl WireTimestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Encodes `ts` in normalized form (`0 <= nanos < 1_000_000_000`).
    pub fn from_timestamp(ts: Timestamp) -> Self {
        let mut seconds = ts.as_second();
        let mut nanos = ts.subsec_nanosecond();

        if nanos < 0 {
            seconds -= 1;
            nanos += NANOS_PER_SECOND;
        }

        Self { seconds, nanos }
    }

    /// Lossless conversion to a native instant. Fails only when the encoded value lies
    /// outside the range a [`Timestamp`] can represent.
    pub fn to_timestamp(&self) -> Result<Timestamp, Error> {
        Timestamp::new(self.seconds, self.nanos).map_err(|_| Error::TimestampOutOfRange {
            seconds: self.seconds,
            nanos: self.nanos,
        })
    }
}

impl From<Timestamp> for WireTimestamp {
    fn from(ts: Timestamp) -> Self {
        WireTimestamp::from_timestamp(ts)
    }
}

impl TryFrom<WireTimestamp> for Timestamp {
    type Error = Error;

    fn try_from(value: WireTimestamp) -> Result<Self, Self::Error> {
        value.to_timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millisecond_instants_round_trip() {
        let ts: Timestamp = "2024-01-15T10:30:45.123Z".parse().unwrap();
        let wire = WireTimestamp::from_timestamp(ts);

        assert_eq!(wire.seconds, 1_705_314_645);
        assert_eq!(wire.nanos, 123_000_000);
        assert_eq!(wire.to_timestamp().unwrap(), ts);
        assert_eq!(wire.to_timestamp().unwrap().as_millisecond(), ts.as_millisecond());
    }

    #[test]
    fn pre_epoch_instants_are_normalized() {
        let ts = Timestamp::from_millisecond(-1_500).unwrap();
        let wire = WireTimestamp::from(ts);

        assert_eq!(wire, WireTimestamp::new(-2, 500_000_000));
        assert_eq!(Timestamp::try_from(wire).unwrap(), ts);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let wire = WireTimestamp::new(i64::MAX, 0);

        match wire.to_timestamp() {
            Err(Error::TimestampOutOfRange { seconds, nanos }) => {
                assert_eq!(seconds, i64::MAX);
                assert_eq!(nanos, 0);
            }
            Ok(ts) => panic!("expected out of range error, got {ts}"),
        }

        assert!(WireTimestamp::new(0, 2_000_000_000).to_timestamp().is_err());
    }

    #[test]
    fn json_nanos_default_to_zero() {
        let wire: WireTimestamp = serde_json::from_str(r#"{"seconds": 1705314600}"#).unwrap();
        assert_eq!(wire, WireTimestamp::new(1_705_314_600, 0));

        let json = serde_json::to_string(&WireTimestamp::new(5, 7)).unwrap();
        assert_eq!(json, r#"{"seconds":5,"nanos":7}"#);
    }
}
