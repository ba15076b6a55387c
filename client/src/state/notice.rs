//! Transient user-facing notices.
//!
//! Every request outcome maps to one fixed message; pages never show raw
//! error text.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

/// How long a notice stays up before dismissing itself.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    /// CSS modifier for the alert banner.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Error => "alert alert--error",
            Self::Warning => "alert alert--warning",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2714}",
            Self::Error => "\u{2716}",
            Self::Warning => "\u{26A0}",
        }
    }
}

/// A request the pages report on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    LoadProducts,
    CreateProduct,
    DeleteProduct,
    LoadProduct,
    LoadComponents,
    CreateComponent,
    DeleteComponent,
    ToggleProduct,
}

impl Operation {
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::LoadProducts => "Failed to load products. Please try again later.",
            Self::CreateProduct => "Failed to create product. Please try again.",
            Self::DeleteProduct => "Failed to delete product. Please try again.",
            Self::LoadProduct => "Failed to load product details. Please try again later.",
            Self::LoadComponents => "Failed to load components. Please try again later.",
            Self::CreateComponent => "Failed to create component. Please try again.",
            Self::DeleteComponent => "Failed to delete component. Please try again.",
            Self::ToggleProduct => "Failed to toggle product status. Please try again.",
        }
    }

    /// Loads succeed silently; toggles report through [`Notice::toggled`].
    #[must_use]
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::CreateProduct => Some("Product created successfully!"),
            Self::DeleteProduct => Some("Product deleted successfully!"),
            Self::CreateComponent => Some("Component created successfully!"),
            Self::DeleteComponent => Some("Component deleted successfully!"),
            Self::LoadProducts | Self::LoadProduct | Self::LoadComponents | Self::ToggleProduct => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    #[must_use]
    pub fn failed(op: Operation) -> Self {
        Self::new(NoticeKind::Error, op.failure_message())
    }

    #[must_use]
    pub fn succeeded(op: Operation) -> Option<Self> {
        op.success_message().map(|message| Self::new(NoticeKind::Success, message))
    }

    /// Success notice for a toggle; `is_active` is the product's new state.
    #[must_use]
    pub fn toggled(is_active: bool) -> Self {
        let verb = if is_active { "activated" } else { "deactivated" };
        Self::new(NoticeKind::Success, format!("Product {verb} successfully!"))
    }

    /// Warning shown instead of submitting a create form with a blank name.
    #[must_use]
    pub fn name_required(entity: &str) -> Self {
        Self::new(NoticeKind::Warning, format!("Please enter a {entity} name."))
    }
}

/// Contents of a page's notice banner.
///
/// Every post bumps a ticket counter. An expiry timer carries the ticket of
/// the post that started it and only clears the banner if no later post has
/// happened, even when the later notice is identical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    posted: u64,
}

impl NoticeSlot {
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show `notice`, replacing any current one. Returns its expiry ticket.
    pub fn post(&mut self, notice: Notice) -> u64 {
        self.posted = self.posted.wrapping_add(1);
        self.current = Some(notice);
        self.posted
    }

    /// Timer expiry for the post that returned `ticket`.
    pub fn expire(&mut self, ticket: u64) {
        if self.posted == ticket {
            self.current = None;
        }
    }

    /// Close button.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
