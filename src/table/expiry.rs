//! # Expiry
//!
//! Deadlines are absolute 32-bit millisecond timestamps on a clock that
//! wraps. A deadline of `NO_EXPIRY` (0) means the record never expires.
//!
//! ## Wraparound
//!
//! A record is expired when `now - expiry`, computed with wrapping u32
//! subtraction and read as a signed delta, is non-negative:
//!
//! ```text
//!   expiry = 0xFFFF_FFF0, now = 0x0000_0010
//!   now - expiry = 0x20  (positive)        -> expired
//!
//!   expiry = 0x0000_0010, now = 0xFFFF_FFF0
//!   now - expiry = 0xFFFF_FFE0 (negative)  -> live
//! ```
//!
//! The comparison stays correct as long as every deadline is within 2^31 ms
//! (~24.8 days) of the current time. Longer TTLs are accepted up to
//! `MAX_TTL_MS` but read as already expired.
//!
//! ## Lazy and Eager Expiry
//!
//! Every scan skips expired records without touching them. Memory is only
//! reclaimed by [`RecordStore::purge_expired`](super::RecordStore::purge_expired),
//! which runs on demand and before every snapshot save.

use crate::config::NO_EXPIRY;

/// Returns true if a record with deadline `expiry` is expired at `now`.
#[inline]
pub fn is_expired(expiry: u32, now: u32) -> bool {
    expiry != NO_EXPIRY && (now.wrapping_sub(expiry) as i32) >= 0
}

/// Computes the deadline for a record inserted at `now` with `ttl_ms`.
pub fn deadline(now: u32, ttl_ms: u32) -> u32 {
    if ttl_ms == 0 {
        return NO_EXPIRY;
    }
    non_zero(now.wrapping_add(ttl_ms))
}

/// Moves a deadline saved at `saved_at` onto a clock that reads `now`,
/// keeping the remaining time unchanged.
pub fn rebase(saved: u32, saved_at: u32, now: u32) -> u32 {
    if saved == NO_EXPIRY {
        return NO_EXPIRY;
    }
    non_zero(now.wrapping_add(saved.wrapping_sub(saved_at)))
}

fn non_zero(deadline: u32) -> u32 {
    if deadline == NO_EXPIRY {
        1
    } else {
        deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_expiry_never_expires() {
        assert!(!is_expired(NO_EXPIRY, 0));
        assert!(!is_expired(NO_EXPIRY, u32::MAX));
    }

    #[test]
    fn test_expires_at_deadline() {
        assert!(!is_expired(1000, 999));
        assert!(is_expired(1000, 1000));
        assert!(is_expired(1000, 5000));
    }

    #[test]
    fn test_wraparound() {
        let d = deadline(u32::MAX - 10, 100);
        assert_eq!(d, 89);
        assert!(!is_expired(d, u32::MAX - 5));
        assert!(!is_expired(d, 88));
        assert!(is_expired(d, 89));
    }

    #[test]
    fn test_deadline_never_lands_on_sentinel() {
        assert_eq!(deadline(u32::MAX, 1), 1);
        assert_eq!(deadline(5, 0), NO_EXPIRY);
    }

    #[test]
    fn test_rebase_keeps_remaining_time() {
        assert_eq!(rebase(1500, 1000, 20), 520);
        assert_eq!(rebase(NO_EXPIRY, 1000, 20), NO_EXPIRY);
        assert_eq!(rebase(10, u32::MAX - 9, 0), 20);
    }
}
