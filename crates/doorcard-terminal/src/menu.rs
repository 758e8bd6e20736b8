//! Numbered operator menus.

use serde::{Deserialize, Serialize};

/// Main menu entries, numbered 1 to 5 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    RemoteOpen,
    ListCards,
    ChangeAccess,
    ScanCard,
    Exit,
}

impl MenuChoice {
    /// All entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::RemoteOpen,
        MenuChoice::ListCards,
        MenuChoice::ChangeAccess,
        MenuChoice::ScanCard,
        MenuChoice::Exit,
    ];

    /// Entry for the number the operator typed, if any.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::RemoteOpen),
            2 => Some(Self::ListCards),
            3 => Some(Self::ChangeAccess),
            4 => Some(Self::ScanCard),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Number shown next to this entry.
    pub fn number(self) -> i64 {
        match self {
            Self::RemoteOpen => 1,
            Self::ListCards => 2,
            Self::ChangeAccess => 3,
            Self::ScanCard => 4,
            Self::Exit => 5,
        }
    }

    /// Menu line text.
    pub fn label(self) -> &'static str {
        match self {
            Self::RemoteOpen => "Remote open door",
            Self::ListCards => "List all cards in system",
            Self::ChangeAccess => "Add/remove access",
            Self::ScanCard => "Fake card test scanning",
            Self::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(number)
    }
}

/// Answer to the grant/deny sub-menus of the add/remove screen.
///
/// Both sub-menus number their entries the same way: 1 grants, 2 denies
/// and anything else cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessChoice {
    Grant,
    Deny,
    Cancel,
}

impl AccessChoice {
    pub fn from_number(number: i64) -> Self {
        match number {
            1 => Self::Grant,
            2 => Self::Deny,
            _ => Self::Cancel,
        }
    }

    /// Access flag to store, `None` when cancelled.
    pub fn access_flag(self) -> Option<bool> {
        match self {
            Self::Grant => Some(true),
            Self::Deny => Some(false),
            Self::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(MenuChoice::RemoteOpen))]
    #[case(2, Some(MenuChoice::ListCards))]
    #[case(3, Some(MenuChoice::ChangeAccess))]
    #[case(4, Some(MenuChoice::ScanCard))]
    #[case(5, Some(MenuChoice::Exit))]
    #[case(0, None)]
    #[case(6, None)]
    #[case(-1, None)]
    #[case(i64::MAX, None)]
    fn test_menu_from_number(#[case] number: i64, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::from_number(number), expected);
    }

    #[test]
    fn test_menu_numbers_roundtrip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::try_from(choice.number()), Ok(choice));
        }
        assert_eq!(MenuChoice::try_from(9), Err(9));
    }

    #[rstest]
    #[case(1, AccessChoice::Grant, Some(true))]
    #[case(2, AccessChoice::Deny, Some(false))]
    #[case(3, AccessChoice::Cancel, None)]
    #[case(0, AccessChoice::Cancel, None)]
    #[case(42, AccessChoice::Cancel, None)]
    fn test_access_choice(
        #[case] number: i64,
        #[case] expected: AccessChoice,
        #[case] flag: Option<bool>,
    ) {
        let choice = AccessChoice::from_number(number);
        assert_eq!(choice, expected);
        assert_eq!(choice.access_flag(), flag);
    }
}
