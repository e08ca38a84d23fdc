use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Creation and last-modification instants of an entity.
///
/// Instants are kept at microsecond precision so that a value read back from
/// Postgres compares equal to the one that was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Timestamps {
    /// Fresh timestamps with `created_at == modified_at == now`.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        let instant = instant.trunc_subsecs(6);
        Self {
            created_at: instant,
            modified_at: instant,
        }
    }

    /// Record a mutation happening now.
    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    /// Record a mutation at `instant`.
    ///
    /// `modified_at` always moves strictly forward, even when the clock
    /// reports an instant at or before the previous modification.
    pub fn touch_at(&mut self, instant: DateTime<Utc>) {
        let floor = self.modified_at + Duration::microseconds(1);
        self.modified_at = instant.trunc_subsecs(6).max(floor);
    }
}
