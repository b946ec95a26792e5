use chrono::{Datelike, Local};

use crate::content::NAME_TOKEN;

/// One word of the rendered hero headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineWord {
    pub text: String,
    pub emphasized: bool,
    pub line_break_after: bool,
}

pub fn substitute_name(template: &str, full_name: &str) -> String {
    template.replacen(NAME_TOKEN, full_name, 1)
}

fn cleaned(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Splits the templated headline into words, emphasizing every word that
/// matches a word of `full_name` and breaking the line after the surname.
///
/// Matching is lexical on the word stripped of non-alphabetic characters, so
/// an ordinary word that happens to equal a name word is emphasized too.
pub fn highlight_headline(template: &str, full_name: &str) -> Vec<HeadlineWord> {
    let heading = substitute_name(template, full_name);
    let name_words = full_name.split_whitespace().collect::<Vec<_>>();
    let last = name_words.last().copied();

    heading
        .split_whitespace()
        .map(|w| {
            let c = cleaned(w);
            let is_last = Some(c.as_str()) == last;
            HeadlineWord {
                text: w.to_string(),
                emphasized: is_last || name_words.contains(&c.as_str()),
                line_break_after: is_last,
            }
        })
        .collect()
}

/// Words of the site name, flagged when they contain the person's first name.
pub fn highlight_site_name(site_name: &str, full_name: &str) -> Vec<(String, bool)> {
    let first = full_name.split_whitespace().next();
    site_name
        .split_whitespace()
        .map(|w| {
            let hit = first.is_some_and(|f| w.contains(f));
            (w.to_string(), hit)
        })
        .collect()
}

pub fn copyright(year: i32, name: &str, note: &str) -> String {
    if note.is_empty() {
        format!("© {year} {name}")
    } else {
        format!("© {year} {name} - {note}")
    }
}

/// Copyright line for the current calendar year. Reads the clock on every call.
pub fn current_copyright(name: &str, note: &str) -> String {
    copyright(Local::now().year(), name, note)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasized(words: &[HeadlineWord]) -> Vec<&str> {
        words
            .iter()
            .filter(|w| w.emphasized)
            .map(|w| w.text.as_str())
            .collect()
    }

    #[test]
    fn test_substitution_is_exact() {
        assert_eq!(substitute_name("Hi {{name}}", "Austin Kane"), "Hi Austin Kane");
        let words = highlight_headline("Hi {{name}}", "Austin Kane");
        let texts = words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["Hi", "Austin", "Kane"]);
    }

    #[test]
    fn test_name_words_emphasized() {
        let words = highlight_headline("Hi, I'm {{name}} building models.", "Austin Kane");
        assert_eq!(emphasized(&words), vec!["Austin", "Kane"]);

        let breaks = words
            .iter()
            .filter(|w| w.line_break_after)
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(breaks, vec!["Kane"]);

        let austin = words.iter().find(|w| w.text == "Austin").unwrap();
        assert!(!austin.line_break_after);
    }

    #[test]
    fn test_punctuation_kept_for_display() {
        let words = highlight_headline("Meet {{name}}, data person.", "Austin Kane");
        let kane = words.iter().find(|w| w.text == "Kane,").unwrap();
        assert!(kane.emphasized);
        assert!(kane.line_break_after);
    }

    #[test]
    fn test_newline_in_template_splits_words() {
        let words = highlight_headline(
            "Hi, I'm {{name}} \n building insights with data & models.",
            "Austin Kane",
        );
        assert_eq!(words[3].text, "Kane");
        assert!(words[3].line_break_after);
        assert_eq!(words[4].text, "building");
        assert!(words.iter().all(|w| !w.text.contains('\n')));
    }

    #[test]
    fn test_single_break_for_any_name_length() {
        for name in ["Cher", "Austin Kane", "Mary Ann Lee Smith"] {
            let words = highlight_headline("Hello, I am {{name}} and I build.", name);
            let breaks = words.iter().filter(|w| w.line_break_after).collect::<Vec<_>>();
            assert_eq!(breaks.len(), 1, "{name}");
            assert_eq!(
                breaks[0].text,
                *name.split_whitespace().collect::<Vec<_>>().last().unwrap()
            );
            assert_eq!(emphasized(&words).len(), name.split_whitespace().count());
        }
    }

    #[test]
    fn test_common_word_matching_name_is_emphasized() {
        // Lexical matching: "Will" in the template is highlighted too.
        let words = highlight_headline("{{name}} says: Will it ship?", "Will Turner");
        assert_eq!(emphasized(&words), vec!["Will", "Turner", "Will"]);
    }

    #[test]
    fn test_site_name_highlights_first_name() {
        assert_eq!(
            highlight_site_name("Austin's Portfolio", "Austin Kane"),
            vec![
                ("Austin's".to_string(), true),
                ("Portfolio".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2031, "Austin Kane", "Data Science Portfolio"),
            "© 2031 Austin Kane - Data Science Portfolio"
        );
        assert_eq!(copyright(1999, "Austin Kane", ""), "© 1999 Austin Kane");
    }

    #[test]
    fn test_current_copyright_has_this_year() {
        let line = current_copyright("Austin Kane", "Portfolio");
        assert!(line.contains(&Local::now().year().to_string()));
        assert!(line.contains("Austin Kane"));
    }
}
