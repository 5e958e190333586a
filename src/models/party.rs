use serde::Serialize;

/// One of the two parties care-time is apportioned between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Party {
    A,
    B,
}

impl Party {
    pub fn as_str(&self) -> &'static str {
        match self {
            Party::A => "A",
            Party::B => "B",
        }
    }
}
