use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::Error as _;
use serde::ser::{Error as _, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::UnixTime;

/// One chart sample: token amount and its USD value at a timestamp.
///
/// Serialized as the numeric triple `[timestamp, amount, usdValue]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TvlPoint {
    /// Sample time.
    pub timestamp: UnixTime,
    /// Human-readable amount, scaled by the token's decimals.
    pub amount: Decimal,
    /// USD value rounded to cents.
    pub usd_value: Decimal,
}

impl Serialize for TvlPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = self
            .amount
            .to_f64()
            .ok_or_else(|| S::Error::custom("amount is not representable as f64"))?;
        let usd_value = self
            .usd_value
            .to_f64()
            .ok_or_else(|| S::Error::custom("usd value is not representable as f64"))?;
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.timestamp.to_seconds())?;
        tup.serialize_element(&amount)?;
        tup.serialize_element(&usd_value)?;
        tup.end()
    }
}

impl<'de> Deserialize<'de> for TvlPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (ts, amount, usd_value) = <(i64, f64, f64)>::deserialize(deserializer)?;
        Ok(Self {
            timestamp: UnixTime::new(ts),
            amount: Decimal::try_from(amount).map_err(D::Error::custom)?,
            usd_value: Decimal::try_from(usd_value).map_err(D::Error::custom)?,
        })
    }
}
