use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

/// The hidden reward behind the countdown screen's gift button.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct LoveVoucher {
    pub heading: &'static str,
    pub message: &'static str,
    pub kind: &'static str,
    pub title: &'static str,
    pub terms: &'static str,
    pub usage: &'static str,
    pub accept: &'static str,
    pub footer: &'static str,
}

pub const LOVE_VOUCHER: LoveVoucher = LoveVoucher {
    heading: "You unlocked something special",
    message: "Because you noticed the little things… you've earned something just for you.",
    kind: "Love Voucher",
    title: "One \"No-Questions-Asked\" Day",
    terms: "Redeemable anytime, anywhere 💗",
    usage: "Use this whenever you want: for a date, a trip, or a day that's all about you.",
    accept: "I'll save this 💖",
    footer: "Valid forever. No expiry. No escape 😉",
};

/// Time elapsed since a moment, split for display.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// A `since` in the future yields all zeroes.
    pub fn between(since: NaiveDateTime, now: NaiveDateTime) -> Self {
        let total = (now - since).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn test_elapsed_split() {
        let met = at(2025, 11, 29, 13, 30, 0);
        let now = at(2025, 12, 31, 15, 45, 12);
        let elapsed = Elapsed::between(met, now);
        assert_eq!(elapsed, Elapsed { days: 32, hours: 2, minutes: 15, seconds: 12 });
    }

    #[test]
    fn test_love_voucher_reads_as_a_no_questions_day() {
        assert_eq!(LOVE_VOUCHER.kind, "Love Voucher");
        assert!(LOVE_VOUCHER.title.contains("No-Questions-Asked"));
        assert!(LOVE_VOUCHER.accept.starts_with("I'll save this"));
    }

    #[test]
    fn test_future_date_clamps_to_zero() {
        let met = at(2025, 11, 29, 13, 30, 0);
        let earlier = at(2025, 11, 1, 0, 0, 0);
        assert_eq!(Elapsed::between(met, earlier), Elapsed::default());
    }
}
