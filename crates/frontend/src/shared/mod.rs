pub mod components;
pub mod entity_list;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notice;
