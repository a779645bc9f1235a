//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render newsroom cards, controls and link strips. Listing
//! controls read and write the shared `NewsroomState` from context; the rest
//! take the article they render as a prop.

pub mod article_card;
pub mod article_image;
pub mod category_filter;
pub mod contact_strip;
pub mod reveal;
pub mod search_box;
pub mod share_bar;
