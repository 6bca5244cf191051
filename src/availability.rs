use crate::{configuration::WorkingHours, types::TimeSlot};

/// Generates the candidate appointment grid for one working day: one slot per
/// interval step inside every hour of `[start_hour, end_hour)`. Every slot is
/// offered as available; existing bookings are not consulted yet.
pub fn day_slots(hours: WorkingHours) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    for hour in hours.start_hour..hours.end_hour {
        let mut minute = 0;
        while minute < 60 {
            slots.push(TimeSlot {
                time: format!("{hour:02}:{minute:02}"),
                available: true,
            });
            minute += hours.interval_minutes;
        }
    }
    slots
}
