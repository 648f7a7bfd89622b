use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::TvlError;

// Largest mantissa a `Decimal` can hold (2^96 - 1).
const MAX_MANTISSA: u128 = (1u128 << 96) - 1;
const MAX_SCALE: u32 = 28;

/// USD value of a raw token amount, in integer cents.
///
/// The price is first rounded to whole cents (half away from zero), then
/// `value = raw * price_cents / 10^decimals`, truncating.
///
/// # Errors
/// Returns `Data` for negative prices or when the product overflows `u128`.
pub fn calculate_value(amount: u128, price_usd: Decimal, decimals: u8) -> Result<u128, TvlError> {
    if price_usd.is_sign_negative() && !price_usd.is_zero() {
        return Err(TvlError::Data(format!("negative price: {price_usd}")));
    }
    let price_cents = (price_usd * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .ok_or_else(|| TvlError::Data(format!("price out of range: {price_usd}")))?;
    let scale = 10u128
        .checked_pow(u32::from(decimals))
        .ok_or_else(|| TvlError::Data(format!("unsupported decimals: {decimals}")))?;
    amount
        .checked_mul(price_cents)
        .map(|v| v / scale)
        .ok_or_else(|| TvlError::Data(format!("value overflow: {amount} * {price_cents}")))
}

/// Interpret a raw integer as a fixed-point number with `scale` decimals.
///
/// Amounts beyond `Decimal` precision lose their least significant digits
/// (rounded half up) rather than failing.
///
/// # Errors
/// Returns `Data` if the integer part alone does not fit into a `Decimal`.
pub fn as_decimal(raw: u128, scale: u32) -> Result<Decimal, TvlError> {
    // Drop the fewest low digits that bring both mantissa and scale into range,
    // rounding once on the whole dropped remainder.
    for dropped in scale.saturating_sub(MAX_SCALE)..=scale {
        let Some(divisor) = 10u128.checked_pow(dropped) else {
            // 10^39 exceeds every u128, so the value rounds to zero.
            return Ok(Decimal::new(0, scale - dropped));
        };
        let rounded = raw / divisor + u128::from(dropped > 0 && raw % divisor >= divisor / 2);
        if rounded <= MAX_MANTISSA {
            let mantissa = i128::try_from(rounded).map_err(|e| TvlError::Data(e.to_string()))?;
            return Decimal::try_from_i128_with_scale(mantissa, scale - dropped)
                .map_err(|e| TvlError::Data(e.to_string()));
        }
    }
    Err(TvlError::Data(format!("amount out of range: {raw}")))
}
