//! Main menu definition

/// Banner and options shown before every selection
pub const MENU_TEXT: &str = "\nPARKING MANAGEMENT\n\
                             1. Vehicle Entry\n\
                             2. Vehicle Exit\n\
                             3. Daily Report\n\
                             4. Exit\n\
                             Choose: ";

/// A main menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Entry,
    Exit,
    Report,
    Quit,
}

impl MenuChoice {
    /// Map the number typed by the operator to an option
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Entry),
            2 => Some(MenuChoice::Exit),
            3 => Some(MenuChoice::Report),
            4 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Entry));
        assert_eq!(MenuChoice::from_number(2), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(3), Some(MenuChoice::Report));
        assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(5), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_menu_text() {
        assert_eq!(
            MENU_TEXT,
            "\nPARKING MANAGEMENT\n1. Vehicle Entry\n2. Vehicle Exit\n3. Daily Report\n4. Exit\nChoose: "
        );
    }
}
