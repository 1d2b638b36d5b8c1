use crate::models::{AppTheme, UserSettings};

/// State behind the settings screen: the draft being edited, separate from
/// the saved copy in the session holder until save-settings succeeds.
#[derive(Debug, Default)]
pub struct SettingsModel {
    draft: UserSettings,
}

impl SettingsModel {
    /// Replace the draft with the settings that came with a login.
    pub fn adopt(&mut self, settings: UserSettings) {
        self.draft = settings;
    }

    pub fn set_theme(&mut self, theme: AppTheme) {
        self.draft.theme = theme;
    }

    pub fn draft(&self) -> &UserSettings {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_edits_the_draft() {
        let mut model = SettingsModel::default();
        model.set_theme(AppTheme::Foxy);
        assert_eq!(model.draft().theme, AppTheme::Foxy);
    }

    #[test]
    fn adopt_overwrites_the_draft() {
        let mut model = SettingsModel::default();
        model.set_theme(AppTheme::Foxy);
        model.adopt(UserSettings { theme: AppTheme::Dark });
        assert_eq!(model.draft().theme, AppTheme::Dark);
    }
}
