//! Top-level routed pages.
//!
//! DESIGN
//! ======
//! Pages own their view state and every request. Each user action spawns
//! one local task; its result is merged with `try_update`/`try_set`, so a
//! response arriving after the page is gone is dropped.

pub mod home;
pub mod product_details;

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeSlot, Operation};

/// Show `notice`, replacing any current one. In the browser it clears
/// itself after [`NOTICE_TIMEOUT`](crate::state::notice::NOTICE_TIMEOUT)
/// unless a later post, even of the same notice, took its place.
pub fn show_notice(slot: RwSignal<NoticeSlot>, notice: Notice) {
    let Some(ticket) = slot.try_update(|s| s.post(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::notice::NOTICE_TIMEOUT).await;
            slot.try_update(|s| s.expire(ticket));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
    }
}

/// Post the fixed notice for an operation's outcome.
pub fn report<T, E>(slot: RwSignal<NoticeSlot>, op: Operation, outcome: &Result<T, E>) {
    let notice = match outcome {
        Ok(_) => Notice::succeeded(op),
        Err(_) => Some(Notice::failed(op)),
    };
    if let Some(notice) = notice {
        show_notice(slot, notice);
    }
}
