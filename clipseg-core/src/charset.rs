//! Character classes shared by the classifier and the strategies
//!
//! CJK here means the common Chinese ideograph block U+4E00..=U+9FA5.
//! Latin means ASCII letters only.

/// Chinese sentence terminators
pub const CJK_SENTENCE_TERMINATORS: [char; 4] = ['。', '！', '？', '；'];

/// Chinese clause separators used to break up long sentences
pub const CJK_CLAUSE_SEPARATORS: [char; 2] = ['，', '、'];

/// Latin sentence terminators
pub const LATIN_SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Recognized wrapping pairs, opening and closing character
pub const WRAPPING_PAIRS: [(char, char); 9] = [
    ('“', '”'),
    ('‘', '’'),
    ('（', '）'),
    ('(', ')'),
    ('【', '】'),
    ('[', ']'),
    ('《', '》'),
    ('<', '>'),
    ('「', '」'),
];

/// Check if a character is a common CJK ideograph
pub fn is_cjk(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&ch)
}

/// Check if a character is an ASCII letter
pub fn is_latin(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if a character is full-width CJK punctuation or a CJK bracket
pub fn is_cjk_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '，' | '。'
            | '！'
            | '？'
            | '；'
            | '：'
            | '、'
            | '“'
            | '”'
            | '‘'
            | '’'
            | '（'
            | '）'
            | '《'
            | '》'
            | '【'
            | '】'
            | '「'
            | '」'
            | '『'
            | '』'
            | '…'
            | '—'
    )
}

/// Check if a character splits text in the punctuation strategy
pub fn is_any_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation() || is_cjk_punctuation(ch)
}

/// Per-script character counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    /// Number of CJK ideographs
    pub cjk: usize,
    /// Number of ASCII letters
    pub latin: usize,
}

impl ScriptCounts {
    /// Count CJK and Latin characters in `text`
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut counts, ch| {
            if is_cjk(ch) {
                counts.cjk += 1;
            } else if is_latin(ch) {
                counts.latin += 1;
            }
            counts
        })
    }
}

/// Split `text` after every terminator, keeping runs of terminators
/// attached to the piece they close.
pub fn split_after_terminators<'a>(text: &'a str, terminators: &[char]) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !terminators.contains(&ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !terminators.contains(&next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        pieces.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}
