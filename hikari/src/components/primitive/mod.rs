pub(crate) mod cover_tile;
pub(crate) mod icon_button;
