pub(crate) mod tab_bar;
