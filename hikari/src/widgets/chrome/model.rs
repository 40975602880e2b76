/// View model for the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel<'a> {
    /// Title of a pushed screen; tab screens render their own heading.
    pub(crate) title: Option<&'a str>,
    pub(crate) can_go_back: bool,
}
