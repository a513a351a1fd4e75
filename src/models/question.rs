use std::fmt;

/// Label of one of the four answer slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Parses a label, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One quiz question as loaded from a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    options: [Option<String>; 4],
    pub answer: OptionLabel,
}

impl QuestionRecord {
    /// Builds a record. Blank option texts are stored as absent slots.
    pub fn new(prompt: impl Into<String>, options: [Option<String>; 4], answer: OptionLabel) -> Self {
        let options = options.map(|slot| slot.filter(|text| !text.trim().is_empty()));
        Self {
            prompt: prompt.into(),
            options,
            answer,
        }
    }

    pub fn option(&self, label: OptionLabel) -> Option<&str> {
        self.options[label.slot()].as_deref()
    }

    /// Labels of the non-empty option slots, in A-D order.
    pub fn visible_labels(&self) -> Vec<OptionLabel> {
        OptionLabel::ALL
            .into_iter()
            .filter(|label| self.option(*label).is_some())
            .collect()
    }

    /// Compares a learner's pick against the correct label.
    pub fn is_correct(&self, selected: &str) -> bool {
        OptionLabel::parse(selected) == Some(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QuestionRecord {
        QuestionRecord::new(
            "2 + 2 = ?",
            [
                Some("3".to_string()),
                Some("4".to_string()),
                Some("   ".to_string()),
                None,
            ],
            OptionLabel::B,
        )
    }

    #[test]
    fn test_label_parse_normalizes() {
        assert_eq!(OptionLabel::parse("b"), Some(OptionLabel::B));
        assert_eq!(OptionLabel::parse(" B "), Some(OptionLabel::B));
        assert_eq!(OptionLabel::parse("\tc\n"), Some(OptionLabel::C));
        assert_eq!(OptionLabel::parse("E"), None);
        assert_eq!(OptionLabel::parse(""), None);
        assert_eq!(OptionLabel::parse("AB"), None);
    }

    #[test]
    fn test_blank_options_are_hidden() {
        let q = record();
        assert_eq!(q.visible_labels(), vec![OptionLabel::A, OptionLabel::B]);
        assert_eq!(q.option(OptionLabel::C), None);
        assert_eq!(q.option(OptionLabel::B), Some("4"));
    }

    #[test]
    fn test_is_correct() {
        let q = record();
        assert!(q.is_correct("b"));
        assert!(q.is_correct(" B "));
        assert!(q.is_correct("B"));
        assert!(!q.is_correct("A"));
        assert!(!q.is_correct("x"));
    }
}
