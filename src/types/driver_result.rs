//! A single row of a race classification table.
//!
//! Every column is kept as text. Results tables are display-oriented, so
//! values such as `"070"`, `"-"` or `"+1 Lap"` must survive untouched.

use serde::{Deserialize, Serialize};

/// Column names in table order, exactly as they appear in source tables.
pub const COLUMNS: [&str; 10] = [
    "Cla", "Driver", "#", "column3", "Chassis", "Engine", "Laps", "Time", "Interval", "km/h",
];

/// One row of race results.
///
/// No field is optional: deserializing a row that lacks any column fails.
/// Rows carry no identity, so two equal rows are both kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverResult {
    /// Classification (finishing position), e.g. `"1"`, `"DNF"`.
    #[serde(rename = "Cla")]
    pub cla: String,
    /// Driver or entrant name.
    #[serde(rename = "Driver")]
    pub driver: String,
    /// Car number.
    #[serde(rename = "#")]
    pub number: String,
    /// Unlabeled column carried through as-is.
    pub column3: String,
    #[serde(rename = "Chassis")]
    pub chassis: String,
    #[serde(rename = "Engine")]
    pub engine: String,
    /// Laps completed.
    #[serde(rename = "Laps")]
    pub laps: String,
    /// Elapsed time or gap.
    #[serde(rename = "Time")]
    pub time: String,
    /// Interval to the car ahead or to the leader.
    #[serde(rename = "Interval")]
    pub interval: String,
    /// Average speed.
    #[serde(rename = "km/h")]
    pub speed_kmh: String,
}

impl DriverResult {
    /// Create a row with the classification and driver set, all other cells empty.
    pub fn new(cla: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            cla: cla.into(),
            driver: driver.into(),
            ..Self::default()
        }
    }

    /// Build a row from cells given in [`COLUMNS`] order.
    pub fn from_cells(cells: [String; 10]) -> Self {
        let [cla, driver, number, column3, chassis, engine, laps, time, interval, speed_kmh] =
            cells;
        Self {
            cla,
            driver,
            number,
            column3,
            chassis,
            engine,
            laps,
            time,
            interval,
            speed_kmh,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_car(mut self, chassis: impl Into<String>, engine: impl Into<String>) -> Self {
        self.chassis = chassis.into();
        self.engine = engine.into();
        self
    }

    /// Set laps, time, interval and speed in one go.
    pub fn with_timing(
        mut self,
        laps: impl Into<String>,
        time: impl Into<String>,
        interval: impl Into<String>,
        speed_kmh: impl Into<String>,
    ) -> Self {
        self.laps = laps.into();
        self.time = time.into();
        self.interval = interval.into();
        self.speed_kmh = speed_kmh.into();
        self
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 10] {
        [
            self.cla.as_str(),
            self.driver.as_str(),
            self.number.as_str(),
            self.column3.as_str(),
            self.chassis.as_str(),
            self.engine.as_str(),
            self.laps.as_str(),
            self.time.as_str(),
            self.interval.as_str(),
            self.speed_kmh.as_str(),
        ]
    }
}
