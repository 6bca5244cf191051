use clap::Parser;

use crate::configuration::{Configuration, WorkingHours};

#[derive(Debug, Clone, Parser)]
#[command(about = "Backend for the barbershop website")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on
    #[arg(long, default_value = "3000")]
    port: String,

    /// First bookable hour of the day
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..24))]
    opening_hour: u32,

    /// First hour of the day that is no longer bookable
    #[arg(long, default_value_t = 17, value_parser = clap::value_parser!(u32).range(1..=24))]
    closing_hour: u32,

    /// Minutes between two offered appointment slots
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=60))]
    slot_interval: u32,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.clone()
    }

    fn working_hours(&self) -> WorkingHours {
        WorkingHours {
            start_hour: self.opening_hour,
            end_hour: self.closing_hour,
            interval_minutes: self.slot_interval,
        }
    }
}
