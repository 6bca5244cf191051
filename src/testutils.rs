use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use crate::{
    backend::BookingBackend,
    configuration::{Configuration, WorkingHours},
    types::{Booking, BookingDetails},
};

pub struct MockBookingBackendInner {
    pub calls_to_bookings: AtomicU64,
    pub calls_to_create_booking: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner {
            calls_to_bookings: AtomicU64::default(),
            calls_to_create_booking: AtomicU64::default(),
            bookings: Mutex::default(),
        }))
    }

    pub fn created_bookings(&self) -> u64 {
        self.0.calls_to_create_booking.load(Ordering::SeqCst)
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings(&self) -> Vec<Booking> {
        self.0.calls_to_bookings.fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().clone()
    }

    fn create_booking(&self, details: BookingDetails) -> Booking {
        self.0.calls_to_create_booking.fetch_add(1, Ordering::SeqCst);
        let booking = Booking::confirmed(details);
        self.0.bookings.lock().unwrap().push(booking.clone());
        booking
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestConfiguration {
    pub working_hours: WorkingHours,
}

impl Configuration for TestConfiguration {
    fn port(&self) -> String {
        "0".into()
    }

    fn working_hours(&self) -> WorkingHours {
        self.working_hours
    }
}
