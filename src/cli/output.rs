//! Output formatting utilities

use crate::domain::Checklist;

/// Format the checklist as numbered lines with a checkbox
pub fn format_checklist(checklist: &Checklist) -> String {
    if checklist.is_empty() {
        return "No checklist entries".to_string();
    }

    let mut output = String::new();
    for (i, entry) in checklist.entries().iter().enumerate() {
        let mark = if entry.checked { "x" } else { " " };
        output.push_str(&format!("{}. [{}] {}\n", i + 1, mark, entry.label));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_checklist() {
        let checklist = Checklist::new(Vec::<String>::new());
        assert_eq!(format_checklist(&checklist), "No checklist entries");
    }

    #[test]
    fn test_format_default_checklist() {
        let output = format_checklist(&Checklist::default());
        assert!(output.starts_with("1. [ ] ✅ Laskavé slovo po probuzení\n"));
        assert!(output.contains("5. [ ] ✅ Úsměv do zrcadla\n"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_format_checked_entry() {
        let mut checklist = Checklist::new(["Voda", "Protažení"]);
        checklist.toggle(1).unwrap();
        assert_eq!(format_checklist(&checklist), "1. [ ] Voda\n2. [x] Protažení\n");
    }
}
