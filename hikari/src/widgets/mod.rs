pub(crate) mod chrome;
pub(crate) mod navigation;
pub(crate) mod settings;
pub(crate) mod sidebar;
pub(crate) mod tabs;
