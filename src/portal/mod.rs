//! Portal access: the HTTP client and the slot model.

pub(crate) mod client;
pub(crate) mod slot;

pub(crate) use client::{PortalClient, SlotSource};
pub(crate) use slot::Slot;
