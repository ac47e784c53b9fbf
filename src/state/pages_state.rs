//! State for the static pages and the profile menu.

/// A question/answer pair of the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        id: 1,
        question: "What can I predict?",
        answer: "Crypto market really",
    },
    FaqItem {
        id: 2,
        question: "How are rewards paid?",
        answer: "How will i get my money?",
    },
    FaqItem {
        id: 3,
        question: "Is PlayZone safe?",
        answer: "is it?",
    },
];

/// FAQ accordion: at most one item is open.
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    pub selected: usize,
    pub open: Option<u32>,
}

impl FaqState {
    /// Open the item, or close it if it is already open.
    pub fn toggle(&mut self, id: u32) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn toggle_selected(&mut self) {
        if let Some(item) = FAQ_ITEMS.get(self.selected) {
            self.toggle(item.id);
        }
    }

    pub fn scroll(&mut self, delta: i32) {
        let max = FAQ_ITEMS.len().saturating_sub(1) as i32;
        self.selected = (self.selected as i32 + delta).clamp(0, max) as usize;
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }
}

/// A toggle on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    EmailNotifications,
    PushNotifications,
    DarkMode,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::EmailNotifications,
        Preference::PushNotifications,
        Preference::DarkMode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email Notifications",
            Self::PushNotifications => "Push Notifications",
            Self::DarkMode => "Dark Mode",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::EmailNotifications => "Receive email updates about your activities",
            Self::PushNotifications => "Get notified about important updates",
            Self::DarkMode => "Switch to dark theme",
        }
    }
}

/// Settings page toggles. Local to the page, never saved.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub selected: usize,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub dark_mode: bool,
}

impl SettingsState {
    pub fn is_enabled(&self, pref: Preference) -> bool {
        match pref {
            Preference::EmailNotifications => self.email_notifications,
            Preference::PushNotifications => self.push_notifications,
            Preference::DarkMode => self.dark_mode,
        }
    }

    pub fn toggle_selected(&mut self) {
        match Preference::ALL.get(self.selected) {
            Some(Preference::EmailNotifications) => {
                self.email_notifications = !self.email_notifications
            }
            Some(Preference::PushNotifications) => {
                self.push_notifications = !self.push_notifications
            }
            Some(Preference::DarkMode) => self.dark_mode = !self.dark_mode,
            None => {}
        }
    }

    pub fn scroll(&mut self, delta: i32) {
        let max = Preference::ALL.len() as i32 - 1;
        self.selected = (self.selected as i32 + delta).clamp(0, max) as usize;
    }
}

/// Entries of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    TransactionHistory,
    Settings,
    LogOut,
}

impl ProfileMenuItem {
    pub const ALL: [ProfileMenuItem; 3] = [
        ProfileMenuItem::TransactionHistory,
        ProfileMenuItem::Settings,
        ProfileMenuItem::LogOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::TransactionHistory => "Transaction History",
            Self::Settings => "Settings",
            Self::LogOut => "Log out",
        }
    }
}

/// Profile dropdown open/close state.
#[derive(Debug, Clone, Default)]
pub struct ProfileMenu {
    pub open: bool,
    pub selected: usize,
}

impl ProfileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn scroll(&mut self, delta: i32) {
        let max = ProfileMenuItem::ALL.len() as i32 - 1;
        self.selected = (self.selected as i32 + delta).clamp(0, max) as usize;
    }

    pub fn selected_item(&self) -> ProfileMenuItem {
        ProfileMenuItem::ALL[self.selected.min(ProfileMenuItem::ALL.len() - 1)]
    }
}
