// Wall-clock source for log timestamps and price labels
use chrono::NaiveTime;

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;

    /// `HH:MM:SS`, used for console lines
    fn timestamp(&self) -> String {
        self.now().format("%H:%M:%S").to_string()
    }

    /// `MM:SS`, used for price window labels
    fn short_label(&self) -> String {
        self.now().format("%M:%S").to_string()
    }
}
