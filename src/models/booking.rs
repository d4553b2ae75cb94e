use chrono::NaiveDate;

use super::{STATUS_COMPLETED, STATUS_PENDING};

/// A stored booking. Never written from the dashboard.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub event_id: i64,
    pub venue_id: i64,
    pub booking_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub event_id: i64,
    pub venue_id: i64,
    pub booking_date: NaiveDate,
    pub status: String,
}

impl NewBooking {
    pub fn pending(event_id: i64, venue_id: i64, booking_date: NaiveDate) -> Self {
        Self {
            event_id,
            venue_id,
            booking_date,
            status: STATUS_PENDING.to_string(),
        }
    }
}

/// One row of the "My Bookings" list: booking joined to its event and venue.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BookingView {
    pub event_name: String,
    pub venue_name: String,
    pub date: NaiveDate,
    pub status: String,
}

impl BookingView {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// Display status for past bookings: anything dated before `today` reads as Completed.
///
/// Applied to the projected rows only; the stored bookings keep their status.
pub fn derive_display_status(rows: Vec<BookingView>, today: NaiveDate) -> Vec<BookingView> {
    rows.into_iter()
        .map(|mut row| {
            if row.date < today && row.status != STATUS_COMPLETED {
                row.status = STATUS_COMPLETED.to_string();
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn view(date: NaiveDate, status: &str) -> BookingView {
        BookingView {
            event_name: "Expo".to_string(),
            venue_name: "Hall A".to_string(),
            date,
            status: status.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()
    }

    #[test]
    fn only_past_rows_become_completed() {
        let t = today();
        let rows = vec![
            view(t + Duration::days(1), "Pending"),
            view(t, "Pending"),
            view(t - Duration::days(1), "Pending"),
        ];

        let out = derive_display_status(rows, t);

        let statuses: Vec<&str> = out.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, vec!["Pending", "Pending", "Completed"]);
    }

    #[test]
    fn past_rows_with_any_status_read_as_completed() {
        let t = today();
        let rows = vec![
            view(t - Duration::days(30), "Cancelled"),
            view(t - Duration::days(2), "Completed"),
        ];

        let out = derive_display_status(rows, t);

        assert!(out.iter().all(BookingView::is_completed));
    }

    #[test]
    fn future_completed_rows_are_left_alone() {
        let t = today();
        let out = derive_display_status(vec![view(t + Duration::days(3), "Completed")], t);
        assert_eq!(out[0].status, "Completed");
    }

    #[test]
    fn order_is_preserved() {
        let t = today();
        let rows = vec![
            view(t + Duration::days(2), "Pending"),
            view(t - Duration::days(1), "Approved"),
            view(t - Duration::days(5), "Pending"),
        ];
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();

        let out = derive_display_status(rows, t);

        assert_eq!(out.iter().map(|r| r.date).collect::<Vec<_>>(), dates);
    }
}
