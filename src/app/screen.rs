// SPDX-License-Identifier: MPL-2.0
//! Panel enumeration for application navigation.

/// Panels the header toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Banner management.
    Admin,
    /// Public landing page with the slider.
    #[default]
    User,
}

impl Screen {
    /// The other panel.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Screen::Admin => Screen::User,
            Screen::User => Screen::Admin,
        }
    }

    /// i18n key naming this panel.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Admin => "admin-panel",
            Screen::User => "user-panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Screen::Admin.toggled(), Screen::User);
        assert_eq!(Screen::User.toggled().toggled(), Screen::User);
    }
}
