use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gloo_timers::callback::Interval;
use web_sys::js_sys;
use yew::prelude::*;

/// Wall-clock time in `tz`, e.g. `03:04 PM`.
pub fn format_local_time(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%I:%M %p").to_string()
}

fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Current time in `tz`, refreshed every second while mounted.
#[hook]
pub fn use_local_time(tz: Tz) -> String {
    let time = use_state(|| format_local_time(now_utc(), tz));
    {
        let time = time.clone();
        use_effect_with_deps(
            move |tz| {
                let tz = *tz;
                time.set(format_local_time(now_utc(), tz));
                let interval = Interval::new(1_000, move || {
                    time.set(format_local_time(now_utc(), tz));
                });
                move || drop(interval)
            },
            tz,
        );
    }
    (*time).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_twelve_hour_clock_in_winter() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 20, 4, 0).unwrap();
        assert_eq!(format_local_time(now, chrono_tz::America::New_York), "03:04 PM");
    }

    #[test]
    fn follows_daylight_saving() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 30, 0).unwrap();
        assert_eq!(format_local_time(now, chrono_tz::America::New_York), "08:30 AM");
    }

    #[test]
    fn other_zones_shift_accordingly() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 5, 0).unwrap();
        assert_eq!(format_local_time(now, chrono_tz::Asia::Tokyo), "09:05 AM");
        assert_eq!(format_local_time(now, chrono_tz::UTC), "12:05 AM");
    }
}
