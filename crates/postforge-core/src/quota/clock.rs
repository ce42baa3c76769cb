use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

/// Source of "now" and of day boundaries.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Last instant (23:59:59.999) of `day`. The default resolves it in
    /// the offset of `now()`.
    fn end_of_day(&self, day: NaiveDate) -> DateTime<FixedOffset> {
        let now = self.now();
        end_of_day_in(now.offset(), day).unwrap_or(now)
    }
}

/// Wall clock in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    // Resolved against the zone rules rather than the current offset, so a
    // DST change later in the day moves the expiry with it.
    fn end_of_day(&self, day: NaiveDate) -> DateTime<FixedOffset> {
        end_of_day_in(&Local, day).unwrap_or_else(|| {
            let now = self.now();
            end_of_day_in(now.offset(), day).unwrap_or(now)
        })
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// 23:59:59.999 of `day` in `tz`. When that wall time occurs twice the
/// later instant is used; `None` if the zone skips it entirely.
pub fn end_of_day_in<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateTime<FixedOffset>> {
    let naive = day.and_hms_milli_opt(23, 59, 59, 999)?;
    tz.from_local_datetime(&naive).latest().map(|eod| eod.fixed_offset())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, LocalResult, NaiveDateTime};

    /// Central European zone around the 2026 autumn change: +02:00 until
    /// 2026-10-25T01:00Z, +01:00 from then on.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FallBackZone;

    impl FallBackZone {
        fn summer() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }

        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn switch_utc() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2026, 10, 25).unwrap().and_hms_opt(1, 0, 0).unwrap()
        }
    }

    impl TimeZone for FallBackZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            FallBackZone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let as_summer = *local - Duration::hours(2) < Self::switch_utc();
            let as_winter = *local - Duration::hours(1) >= Self::switch_utc();
            match (as_summer, as_winter) {
                (true, true) => LocalResult::Ambiguous(Self::summer(), Self::winter()),
                (true, false) => LocalResult::Single(Self::summer()),
                (false, true) => LocalResult::Single(Self::winter()),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch_utc() {
                Self::summer()
            } else {
                Self::winter()
            }
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_of_day_keeps_offset() {
        let clock = FixedClock(DateTime::parse_from_rfc3339("2026-10-18T09:15:00+02:00").unwrap());
        let eod = clock.end_of_day(clock.today());
        assert_eq!(eod.to_rfc3339(), "2026-10-18T23:59:59.999+02:00");
    }

    #[test]
    fn test_fixed_clock_today() {
        let clock = FixedClock(DateTime::parse_from_rfc3339("2026-01-31T23:30:00-05:00").unwrap());
        assert_eq!(clock.today(), day(2026, 1, 31));
    }

    #[test]
    fn test_end_of_day_follows_fall_back() {
        // 00:30 local, still on summer time
        let now = FallBackZone
            .from_local_datetime(&day(2026, 10, 25).and_hms_opt(0, 30, 0).unwrap())
            .single()
            .unwrap();
        assert_eq!(*now.offset(), FallBackZone::summer());

        let eod = end_of_day_in(&FallBackZone, now.date_naive()).unwrap();
        assert_eq!(eod.to_rfc3339(), "2026-10-25T23:59:59.999+01:00");

        // The request-time offset would end the day an hour early.
        let snapshot = end_of_day_in(now.offset(), now.date_naive()).unwrap();
        assert_eq!(eod - snapshot, Duration::hours(1));
    }

    #[test]
    fn test_ambiguous_wall_time_takes_later_instant() {
        let repeated = day(2026, 10, 25).and_hms_opt(2, 30, 0).unwrap();
        let later = FallBackZone.from_local_datetime(&repeated).latest().unwrap();
        assert_eq!(later.to_rfc3339(), "2026-10-25T02:30:00+01:00");
    }

    #[test]
    fn test_system_clock_uses_zone_rules() {
        let today = SystemClock.today();
        assert_eq!(SystemClock.end_of_day(today), end_of_day_in(&Local, today).unwrap());
    }
}
