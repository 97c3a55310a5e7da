use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc,
};

use crate::error::RestampError;

/// Reference point a plan's offsets are measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineStrategy {
    /// Newest point is a fixed UTC instant; offsets walk backwards into the
    /// past. Absolute instants reproduce on any host.
    FixedAnchor,
    /// Anchor is a local calendar datetime reinterpreted in the executing
    /// host's time zone at run time; offsets walk forwards. Hosts in
    /// different zones produce different absolute instants, which is
    /// documented behavior for this mode.
    ForwardAnchor,
}

/// Total offset in seconds for a (rank, slot, nudge) triple. Each category
/// owns a block of slots_per_category * seconds_between_items seconds; the
/// nudge perturbs same-slot collisions by at most one second.
pub fn offset_seconds(
    rank: usize,
    slot: i64,
    nudge: i64,
    seconds_between_items: u32,
    slots_per_category: u32,
) -> i64 {
    let spacing = i64::from(seconds_between_items);
    let block = i64::from(slots_per_category) * spacing;
    rank as i64 * block + slot * spacing + nudge
}

/// Convert an offset into an absolute instant under the given strategy.
pub fn project(offset_seconds: i64, strategy: TimelineStrategy) -> Result<DateTime<Utc>, RestampError> {
    match strategy {
        TimelineStrategy::FixedAnchor => Ok(fixed_anchor()? - Duration::seconds(offset_seconds)),
        TimelineStrategy::ForwardAnchor => {
            Ok(forward_anchor()? + Duration::seconds(offset_seconds))
        }
    }
}

/// The fixed backward anchor: 2099-01-01 07:59:59 UTC, the newest point on
/// that timeline.
fn fixed_anchor() -> Result<DateTime<Utc>, RestampError> {
    Utc.with_ymd_and_hms(2099, 1, 1, 7, 59, 59)
        .single()
        .ok_or_else(|| RestampError::Plan("fixed anchor is not representable".to_string()))
}

/// The forward anchor: local midnight of 2098-12-31 in the host's current
/// zone. Ambiguous local times resolve to the earlier instant; a nonexistent
/// local time is a planning failure for the run.
fn forward_anchor() -> Result<DateTime<Utc>, RestampError> {
    let date = NaiveDate::from_ymd_opt(2098, 12, 31)
        .ok_or_else(|| RestampError::Plan("forward anchor date is not representable".to_string()))?;
    let midnight = NaiveDateTime::new(date, NaiveTime::MIN);
    let anchor = match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(dt, alt) => dt.min(alt),
        LocalResult::None => {
            return Err(RestampError::Plan(
                "forward anchor does not exist in the local time zone".to_string(),
            ));
        }
    };
    Ok(anchor.with_timezone(&Utc))
}

/// Force an even second with zero sub-second component, rounding an odd
/// second up by one. FAT mtime has 2-second granularity.
pub fn snap_even_second(dt: DateTime<Utc>) -> DateTime<Utc> {
    let mut snapped = dt.with_nanosecond(0).unwrap_or(dt);
    if snapped.second() % 2 == 1 {
        snapped += Duration::seconds(1);
    }
    snapped
}
