/// The kinds of readings exposed by the data API.
///
/// Each kind maps to its own URL path segment; the `current` endpoint uses
/// the abbreviated `cur` segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingKind {
    Current,
    Daily,
    Hourly,
}

impl ReadingKind {
    pub const ALL: [ReadingKind; 3] = [
        ReadingKind::Current,
        ReadingKind::Daily,
        ReadingKind::Hourly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReadingKind::Current => "current",
            ReadingKind::Daily => "daily",
            ReadingKind::Hourly => "hourly",
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            ReadingKind::Current => "cur",
            ReadingKind::Daily => "daily",
            ReadingKind::Hourly => "hourly",
        }
    }
}
