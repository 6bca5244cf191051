use crate::{
    backend::BookingBackend,
    types::{Booking, BookingDetails},
};
use std::sync::{Arc, Mutex};
use tracing::info;

/// In-process booking store. Constructed once in `main` and cloned into the
/// router state; the mutex serializes appends from concurrent requests on the
/// same instance. Records live as long as the process and are never shared
/// across instances.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<Vec<Booking>>>,
}

impl BookingBackend for LocalBookings {
    fn bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    fn create_booking(&self, details: BookingDetails) -> Booking {
        let booking = Booking::confirmed(details);
        self.bookings.lock().unwrap().push(booking.clone());
        info!(id = %booking.id, barber_id = %booking.barber_id, "booking created");
        booking
    }
}
