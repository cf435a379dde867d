/*! Rendering of converted chapters as a JavaScript/TypeScript object literal.

The output is meant to be pasted into the app's surah table, keyed by chapter number:

```text
    2: {
        surahNumber: 2,
        surahName: 'Al-Baqarah',
        ayat: [
            { ayahNumber: 1, arabic: '...', ..., words: [
                { arabic: '...', ..., analysis: { type: '...', root: '...', rootExplanation: '...', grammar: '...' } }
            ] }
        ]
    },
```
!*/
use std::fmt::{self, Write};

use super::record::{ConvertedVerse, ConvertedWord};

const INDENT: &str = "    ";

/// Wrap `text` in single quotes, escaping what would end or alter the literal:
/// the quote itself, backslashes and line terminators.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Displayable chapter literal.
pub struct SurahLiteral<'a> {
    pub chapter: u32,
    pub name: &'a str,
    pub ayat: &'a [ConvertedVerse],
}

impl fmt::Display for SurahLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}: {{", INDENT, self.chapter)?;
        writeln!(f, "{0}{0}surahNumber: {1},", INDENT, self.chapter)?;
        writeln!(f, "{0}{0}surahName: {1},", INDENT, quote(self.name))?;
        writeln!(f, "{0}{0}ayat: [", INDENT)?;

        for (i, ayah) in self.ayat.iter().enumerate() {
            write_ayah(f, ayah)?;
            if i + 1 < self.ayat.len() {
                f.write_char(',')?;
            }
            f.write_char('\n')?;
        }

        writeln!(f, "{0}{0}]", INDENT)?;
        writeln!(f, "{}}},", INDENT)
    }
}

fn write_ayah(f: &mut fmt::Formatter<'_>, ayah: &ConvertedVerse) -> fmt::Result {
    write!(
        f,
        "{0}{0}{0}{{ ayahNumber: {1}, arabic: {2}, transliteration: {3}, translation: {4}, recitationUrl: {5}, words: [",
        INDENT,
        ayah.ayah_number,
        quote(&ayah.arabic),
        quote(&ayah.transliteration),
        quote(&ayah.translation),
        quote(&ayah.recitation_url),
    )?;

    if ayah.words.is_empty() {
        return f.write_str("] }");
    }

    f.write_char('\n')?;
    for (i, word) in ayah.words.iter().enumerate() {
        write_word(f, word)?;
        if i + 1 < ayah.words.len() {
            f.write_char(',')?;
        }
        f.write_char('\n')?;
    }
    write!(f, "{0}{0}{0}] }}", INDENT)
}

fn write_word(f: &mut fmt::Formatter<'_>, word: &ConvertedWord) -> fmt::Result {
    let a = &word.analysis;
    write!(
        f,
        "{0}{0}{0}{0}{{ arabic: {1}, transliteration: {2}, translation: {3}, analysis: {{ type: {4}, root: {5}, rootExplanation: {6}, grammar: {7} }} }}",
        INDENT,
        quote(&word.arabic),
        quote(&word.transliteration),
        quote(&word.translation),
        quote(&a.kind),
        quote(&a.root),
        quote(&a.root_explanation),
        quote(&a.grammar),
    )
}

/// Render `ayat` as the literal entry of chapter `chapter` named `name`.
pub fn emit(ayat: &[ConvertedVerse], chapter: u32, name: &str) -> String {
    SurahLiteral {
        chapter,
        name,
        ayat,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::convert::record::Analysis;

    /// Decode a single-quoted literal, failing on any unescaped quote inside it.
    fn unquote(literal: &str) -> Option<String> {
        let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\'' | '\n' | '\r' => return None,
                '\\' => match chars.next()? {
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    'u' => {
                        let hex: String = chars.by_ref().take(4).collect();
                        out.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
                    }
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
        Some(out)
    }

    #[test]
    fn quote_round_trip() {
        let texts = [
            "When it is said to them, 'Fear Allah,'",
            "walabi'sa l-mihādu",
            r#"He said "peace""#,
            r"back\slash \' tricky",
            "line\nbreak\r\n",
            "وَإِذَا قِيلَ لَهُ ٱتَّقِ ٱللَّهَ",
            "",
        ];
        for text in texts {
            let q = quote(text);
            assert_eq!(unquote(&q).as_deref(), Some(text), "literal: {}", q);
        }
    }

    #[test]
    fn only_delimiter_escaped_in_plain_text() {
        assert_eq!(quote(r#"say "hi", it's"#), r#"'say "hi", it\'s'"#);
        assert_eq!(quote("ʿizatu"), "'ʿizatu'");
    }

    fn ayah(n: u32, words: Vec<ConvertedWord>) -> ConvertedVerse {
        ConvertedVerse {
            ayah_number: n,
            arabic: "الٓمٓ".to_string(),
            transliteration: "alif-lam-meem".to_string(),
            translation: "Alif, Lam, Meem.".to_string(),
            recitation_url: format!("https://everyayah.com/data/r/002{:03}.mp3", n),
            words,
        }
    }

    fn word() -> ConvertedWord {
        ConvertedWord {
            arabic: "لَهُ".to_string(),
            transliteration: "lahu".to_string(),
            translation: "to him".to_string(),
            analysis: Analysis {
                kind: "Harf + Ism".to_string(),
                root: "N/A".to_string(),
                root_explanation: String::new(),
                grammar: "'La' (to) + 'hu' (him) = 'to him'.".to_string(),
            },
        }
    }

    #[test]
    fn emit_layout() {
        let out = emit(&[ayah(1, vec![word(), word()]), ayah(2, vec![])], 2, "Al-Baqarah");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "    2: {");
        assert_eq!(lines[1], "        surahNumber: 2,");
        assert_eq!(lines[2], "        surahName: 'Al-Baqarah',");
        assert_eq!(lines[3], "        ayat: [");
        assert!(lines[4].starts_with("            { ayahNumber: 1, arabic: 'الٓمٓ', "));
        assert!(lines[4].ends_with("words: ["));
        assert!(lines[5].ends_with("} },"));
        assert!(lines[6].ends_with("} }"));
        assert_eq!(lines[7], "            ] },");
        assert!(lines[8].ends_with("words: [] }"));
        assert_eq!(lines[9], "        ]");
        assert_eq!(lines[10], "    },");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn emitted_strings_stay_closed() {
        let out = emit(&[ayah(1, vec![word()])], 2, "Al-Baqarah");
        assert!(out.contains(r"grammar: '\'La\' (to) + \'hu\' (him) = \'to him\'.'"));

        // unescaped quotes come in pairs on every line
        for line in out.lines() {
            let mut count = 0;
            let mut escaped = false;
            for c in line.chars() {
                match c {
                    '\\' if !escaped => escaped = true,
                    '\'' if !escaped => count += 1,
                    _ => escaped = false,
                }
            }
            assert_eq!(count % 2, 0, "unbalanced line: {}", line);
        }
    }

    #[test]
    fn empty_chapter() {
        let out = emit(&[], 1, "Al-Fatiha");
        assert_eq!(
            out,
            "    1: {\n        surahNumber: 1,\n        surahName: 'Al-Fatiha',\n        ayat: [\n        ]\n    },\n"
        );
    }
}
