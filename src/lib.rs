pub mod background;
pub mod contents_json;
pub mod emblem;
pub mod icon_gen;
pub mod icon_set;
pub mod trophy;
