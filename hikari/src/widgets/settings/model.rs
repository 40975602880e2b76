/// Read-only snapshot for the settings form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewModel {
    pub(crate) is_dark: bool,
}
