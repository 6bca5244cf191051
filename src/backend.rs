use crate::types::{Booking, BookingDetails};

/// Store for booking records. Exactly one implementation serves production
/// traffic; tests substitute a counting mock.
pub trait BookingBackend: Clone + Send + Sync + 'static {
    fn bookings(&self) -> Vec<Booking>;

    /// Stamps the server-assigned fields and appends the record. Appending to
    /// process memory has no failure mode once the caller fields are validated,
    /// so the created record is returned directly.
    fn create_booking(&self, details: BookingDetails) -> Booking;
}
