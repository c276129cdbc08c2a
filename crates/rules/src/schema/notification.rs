//! Incoming notification triple.

use serde::{Deserialize, Serialize};

/// A desktop notification as delivered by the notification source.
///
/// Any field may be missing; the router treats a missing field as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, alias = "app")]
    pub app_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Notification {
    pub fn new(
        app_name: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            app_name: Some(app_name.into()),
            summary: Some(summary.into()),
            body: Some(body.into()),
        }
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
