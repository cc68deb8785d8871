//! The bus record.

use serde::{Deserialize, Serialize};

use super::{key_field, text_field, ValidationError};
use crate::store::{parse_field, Record};

/// A registered bus: capacity, route, departure time and fare.
///
/// # Examples
///
/// ```
/// use busres::Bus;
///
/// let bus = Bus::builder("B1", 40)
///     .route("Pune", "Mumbai")
///     .start_time("08:00")
///     .fare(450.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(bus.bus_number(), "B1");
/// assert_eq!(bus.total_seats(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    bus_number: String,
    total_seats: u32,
    start_point: String,
    end_point: String,
    start_time: String,
    fare: f64,
}

impl Bus {
    /// Creates a new bus builder.
    #[must_use]
    pub fn builder(bus_number: impl Into<String>, total_seats: u32) -> BusBuilder {
        BusBuilder {
            bus_number: bus_number.into(),
            total_seats,
            start_point: String::new(),
            end_point: String::new(),
            start_time: String::new(),
            fare: 0.0,
        }
    }

    /// Returns the unique bus number.
    #[must_use]
    pub fn bus_number(&self) -> &str {
        &self.bus_number
    }

    /// Returns the seat capacity.
    #[must_use]
    pub const fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Returns where the route starts.
    #[must_use]
    pub fn start_point(&self) -> &str {
        &self.start_point
    }

    /// Returns where the route ends.
    #[must_use]
    pub fn end_point(&self) -> &str {
        &self.end_point
    }

    /// Returns the departure time as entered at registration.
    #[must_use]
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Returns the fare.
    #[must_use]
    pub const fn fare(&self) -> f64 {
        self.fare
    }

    /// Checks whether the bus runs between the given endpoints.
    ///
    /// Both endpoints are compared case-insensitively, ignoring surrounding
    /// whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use busres::Bus;
    ///
    /// let bus = Bus::builder("B1", 2).route("Pune", "Mumbai").build().unwrap();
    /// assert!(bus.serves_route("pune", " MUMBAI "));
    /// assert!(!bus.serves_route("Mumbai", "Pune"));
    ///
    /// let alpine = Bus::builder("B2", 2).route("Zürich", "Genève").build().unwrap();
    /// assert!(alpine.serves_route("ZÜRICH", "GENÈVE"));
    /// ```
    #[must_use]
    pub fn serves_route(&self, start: &str, end: &str) -> bool {
        same_place(&self.start_point, start) && same_place(&self.end_point, end)
    }
}

/// Unicode case-insensitive comparison of two trimmed place names.
fn same_place(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

impl std::fmt::Display for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bus Number: {}, Seats: {}, Route: {} to {}, Time: {}, Fare: {:.2}",
            self.bus_number,
            self.total_seats,
            self.start_point,
            self.end_point,
            self.start_time,
            self.fare
        )
    }
}

impl Record for Bus {
    const KIND: &'static str = "bus";
    const FIELD_COUNT: usize = 6;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.bus_number.clone(),
            self.total_seats.to_string(),
            self.start_point.clone(),
            self.end_point.clone(),
            self.start_time.clone(),
            self.fare.to_string(),
        ]
    }

    fn from_fields(fields: &csv::StringRecord) -> Result<Self, String> {
        let total_seats = parse_field(fields, 1, "total seats")?;
        let fare = parse_field(fields, 5, "fare")?;
        Self::builder(&fields[0], total_seats)
            .route(&fields[2], &fields[3])
            .start_time(&fields[4])
            .fare(fare)
            .build()
            .map_err(|e| e.to_string())
    }
}

/// Builder for creating `Bus` instances.
#[derive(Debug)]
pub struct BusBuilder {
    bus_number: String,
    total_seats: u32,
    start_point: String,
    end_point: String,
    start_time: String,
    fare: f64,
}

impl BusBuilder {
    /// Sets both route endpoints.
    #[must_use]
    pub fn route(mut self, start_point: impl Into<String>, end_point: impl Into<String>) -> Self {
        self.start_point = start_point.into();
        self.end_point = end_point.into();
        self
    }

    /// Sets the departure time.
    #[must_use]
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    /// Sets the fare.
    #[must_use]
    pub const fn fare(mut self, fare: f64) -> Self {
        self.fare = fare;
        self
    }

    /// Builds the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The bus number is empty after trimming
    /// - The seat count is zero
    /// - The fare is negative or not finite
    /// - Any text field contains a line break
    ///
    /// # Examples
    ///
    /// ```
    /// use busres::Bus;
    ///
    /// assert!(Bus::builder("B1", 2).build().is_ok());
    /// assert!(Bus::builder("B1", 0).build().is_err());
    /// assert!(Bus::builder(" ", 2).build().is_err());
    /// assert!(Bus::builder("B1", 2).fare(-1.0).build().is_err());
    /// ```
    pub fn build(self) -> Result<Bus, ValidationError> {
        let bus_number = key_field("bus_number", &self.bus_number)?;

        if self.total_seats == 0 {
            return Err(ValidationError::new("total_seats", "must be positive"));
        }

        if !self.fare.is_finite() || self.fare < 0.0 {
            return Err(ValidationError::new(
                "fare",
                "must be a non-negative number",
            ));
        }

        Ok(Bus {
            bus_number,
            total_seats: self.total_seats,
            start_point: text_field("start_point", &self.start_point)?,
            end_point: text_field("end_point", &self.end_point)?,
            start_time: text_field("start_time", &self.start_time)?,
            fare: self.fare,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{decode_line, encode_line};

    fn sample() -> Bus {
        Bus::builder("B1", 2)
            .route("X", "Y")
            .start_time("08:00")
            .fare(100.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_trims_fields() {
        let bus = Bus::builder("  B7 ", 3)
            .route(" Pune", "Goa ")
            .start_time(" 21:30 ")
            .build()
            .unwrap();
        assert_eq!(bus.bus_number(), "B7");
        assert_eq!(bus.start_point(), "Pune");
        assert_eq!(bus.end_point(), "Goa");
        assert_eq!(bus.start_time(), "21:30");
    }

    #[test]
    fn test_builder_rejects_zero_seats() {
        let err = Bus::builder("B1", 0).build().unwrap_err();
        assert_eq!(err.field, "total_seats");
    }

    #[test]
    fn test_builder_rejects_bad_fare() {
        assert_eq!(
            Bus::builder("B1", 1).fare(f64::NAN).build().unwrap_err().field,
            "fare"
        );
        assert_eq!(
            Bus::builder("B1", 1).fare(-0.5).build().unwrap_err().field,
            "fare"
        );
    }

    #[test]
    fn test_display() {
        let display = format!("{}", sample());
        assert_eq!(
            display,
            "Bus Number: B1, Seats: 2, Route: X to Y, Time: 08:00, Fare: 100.00"
        );
    }

    #[test]
    fn test_encode_matches_legacy_format() {
        assert_eq!(encode_line(&sample()).unwrap(), "B1,2,X,Y,08:00,100");
    }

    #[test]
    fn test_decode_legacy_line() {
        let bus: Bus = decode_line("B1,2,X,Y,08:00,100.0").unwrap();
        assert_eq!(bus, sample());
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        let err = decode_line::<Bus>("B1,2,X,Y,08:00").unwrap_err();
        assert!(format!("{err}").contains("expected 6 fields, found 5"));
    }

    #[test]
    fn test_decode_rejects_non_numeric_seats() {
        let err = decode_line::<Bus>("B1,two,X,Y,08:00,100").unwrap_err();
        assert!(format!("{err}").contains("total seats"));
    }

    #[test]
    fn test_decode_rejects_zero_seats() {
        assert!(decode_line::<Bus>("B1,0,X,Y,08:00,100").is_err());
    }

    #[test]
    fn test_route_with_comma_survives_encoding() {
        let bus = Bus::builder("B2", 5)
            .route("Panaji, Goa", "Mumbai")
            .build()
            .unwrap();
        let line = encode_line(&bus).unwrap();
        assert!(line.contains("\"Panaji, Goa\""));
        assert_eq!(decode_line::<Bus>(&line).unwrap(), bus);
    }

    #[test]
    fn test_serves_route() {
        let bus = sample();
        assert!(bus.serves_route("x", "y"));
        assert!(!bus.serves_route("x", "z"));
    }

    #[test]
    fn test_serves_route_folds_non_ascii_case() {
        let bus = Bus::builder("B3", 2)
            .route("Zürich", "Genève")
            .build()
            .unwrap();
        assert!(bus.serves_route("ZÜRICH", "genève"));
        assert!(bus.serves_route(" zürich ", "GENÈVE"));
        assert!(!bus.serves_route("Zurich", "Geneve"));
    }
}
