pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    fn working_hours(&self) -> WorkingHours;
}

/// The fixed grid the availability endpoint is generated from: hours in
/// `[start_hour, end_hour)`, one slot every `interval_minutes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
    pub interval_minutes: u32,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
            interval_minutes: 30,
        }
    }
}
