//! CSV ingestion: thin, lenient transport layer turning flight/driver/shift
//! CSV text into the core's input types. Malformed individual rows are
//! skipped with a `warn!`, not an error — structural failures (no header,
//! unreadable file) are the only thing that surfaces as `anyhow::Error`.

pub mod autolifts;
pub mod drivers;
pub mod flights;
pub mod shifts;

pub use autolifts::parse_autolifts_csv;
pub use drivers::parse_drivers_csv;
pub use flights::parse_flights_csv;
pub use shifts::parse_shifts_csv;
