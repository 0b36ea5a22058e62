#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub icon: String,
    pub title: String,
}

impl EventRecord {
    pub fn new(icon: &str, title: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
        }
    }

    pub fn display_line(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_copies_icon_and_title() {
        let record = EventRecord::new("🍎", "Breakfast");
        assert_eq!(record.icon, "🍎");
        assert_eq!(record.title, "Breakfast");
    }

    #[test]
    fn display_line_joins_icon_and_title() {
        let record = EventRecord::new("🎒", "School");
        assert_eq!(record.display_line(), "🎒 School");
    }
}
