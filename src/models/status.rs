use std::fmt;

/// Handling state of a process. The declaration order is the canonical
/// order used by the summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Attended,
    ForwardedToStoreFront,
    Completed,
    Reviewed,
    Unclear,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Attended,
        Status::ForwardedToStoreFront,
        Status::Completed,
        Status::Reviewed,
        Status::Unclear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Attended => "Attended",
            Status::ForwardedToStoreFront => "Forwarded to Store Front",
            Status::Completed => "Completed",
            Status::Reviewed => "Reviewed",
            Status::Unclear => "Unclear",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Status::Attended => "attended",
            Status::ForwardedToStoreFront => "forwarded",
            Status::Completed => "completed",
            Status::Reviewed => "reviewed",
            Status::Unclear => "unclear",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Status::ALL.into_iter().find(|st| st.label() == s)
    }

    /// Helper: convert user input (label or short code, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        let wanted = code.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        Status::ALL.into_iter().find(|st| {
            st.code() == wanted
                || st.label().to_lowercase() == wanted
                || st.label().to_lowercase().replace(' ', "-") == wanted
        })
    }

    /// Parse a status filter: `all` / `(All)` / empty mean "no filter".
    pub fn parse_filter(input: &str) -> Option<Option<Self>> {
        let t = input.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("all") || t.eq_ignore_ascii_case("(all)") {
            return Some(None);
        }
        Status::from_code(t).map(Some)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
