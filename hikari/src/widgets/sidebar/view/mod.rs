pub(crate) mod drawer_panel;
