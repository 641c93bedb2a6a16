use crate::ShopStyle;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visit to the coffee shop: a chosen style and when it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    style: ShopStyle,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn open(style: ShopStyle) -> Self {
        Self {
            id: SessionId::new(),
            style,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn style(&self) -> ShopStyle {
        self.style
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
