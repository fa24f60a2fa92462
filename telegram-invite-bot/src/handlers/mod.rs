//! Handlers for the invite service.

mod invite;

pub use invite::{
    batch_link_name, InviteHandler, MAX_LINK_NAME_CHARS, MSG_INVITE_FAILED, SINGLE_INVITE_NAME,
};
