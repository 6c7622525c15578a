//! Unknown-word detection over justification text.
//!
//! A morphological tokenizer segments the text into surface tokens; spans
//! the lexicon cannot resolve are surfaced as typo candidates. Advisory
//! only — a flagged span is not claimed to be an error and no correction is
//! attempted. For a fixed lexicon the segmentation is deterministic: the
//! same text always yields the same unknown-word set.

use std::collections::HashSet;

use super::types::{CheckRow, UnknownWord};

/// One surface token produced by segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub known: bool,
}

impl Token {
    fn known(surface: String) -> Token {
        Token {
            surface,
            known: true,
        }
    }

    fn unknown(surface: String) -> Token {
        Token {
            surface,
            known: false,
        }
    }
}

/// Morphological segmentation seam (allows substituting a fake in tests).
pub trait Morphology {
    fn segment(&self, text: &str) -> Vec<Token>;
}

/// Character classes driving segmentation. Lexical classes (kanji,
/// katakana) are resolved against the lexicon; the rest are closed-class
/// and never flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Kanji,
    Hiragana,
    Katakana,
    Alnum,
    Other,
}

fn classify(ch: char) -> CharClass {
    match ch {
        '々' => CharClass::Kanji,
        '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' => CharClass::Kanji,
        '\u{3041}'..='\u{3096}' => CharClass::Hiragana,
        '\u{30A1}'..='\u{30FA}' | 'ー' => CharClass::Katakana,
        // Full-width digits and latin letters, as the forms type them
        '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
            CharClass::Alnum
        }
        _ if ch.is_ascii_alphanumeric() => CharClass::Alnum,
        _ => CharClass::Other,
    }
}

/// Known vocabulary for justification texts: the wording the selection
/// forms actually use. Grouped for maintenance; order is irrelevant (the
/// tokenizer builds a hash set).
const LEXICON: &[&str] = &[
    // Subjects and fields
    "国語", "算数", "数学", "理科", "社会", "英語", "音楽", "美術", "体育", "家庭",
    "技術", "情報", "歴史", "地理", "公民", "生活", "日本", "世界",
    // School context
    "教科", "教科書", "教材", "教育", "学校", "学年", "学習", "授業", "生徒", "児童",
    "子供",
    "本校", "自校", "指導", "単元", "題材", "発達", "段階", "実態", "興味", "関心",
    "意欲", "理解", "基礎", "基本", "知識", "技能", "思考", "判断", "育成", "観点",
    "観察", "活動", "活用", "課題", "練習", "例題",
    // Editorial qualities the forms praise
    "内容", "構成", "配列", "分量", "表記", "表現", "資料", "図版", "図表", "写真",
    "地図", "文章", "記述", "説明", "工夫", "配慮", "特色", "特徴", "適切", "豊富",
    "充実", "精選", "吟味", "漢字", "語彙", "文字", "用語", "索引", "巻頭", "巻末",
    "改訂", "最新", "様々", "人々", "安全", "健康", "環境", "地域",
    // Selection procedure
    "選定", "採択", "理由", "比較", "他社", "発行", "発行者", "出版", "書名", "書籍",
    "番号", "略称", "種目", "目録", "様式", "別紙", "編集", "印刷", "誤字", "脱字",
    // Lone kanji that appear between okurigana
    "適", "合", "優", "使", "見", "読", "書", "学", "考", "選", "多", "高", "深",
    "良", "図", "分", "載", "沿", "即", "示", "扱", "求", "促", "養", "身", "付",
    "力", "点", "等", "冊", "頁", "例", "章", "節", "色", "絵", "量", "質", "幅",
    "新", "心", "者", "子", "向",
    // Katakana loanwords
    "アンケート", "イメージ", "イラスト", "カラー", "グラフ", "コラム", "サイズ",
    "シリーズ", "シート", "データ", "デザイン", "デジタル", "ノート", "バランス",
    "ページ", "パソコン", "ポイント", "メモ", "ユニバーサル", "レイアウト",
    "レベル", "ワーク",
];

/// Lexicon-driven tokenizer: character-class runs, with kanji and katakana
/// runs resolved by greedy longest-match against the lexicon. Hiragana
/// (particles and okurigana), digits, latin and punctuation are
/// closed-class and always resolve.
pub struct LexiconTokenizer {
    lexicon: HashSet<&'static str>,
    max_word_chars: usize,
}

impl LexiconTokenizer {
    pub fn new() -> LexiconTokenizer {
        let lexicon: HashSet<&'static str> = LEXICON.iter().copied().collect();
        let max_word_chars = LEXICON
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(1);
        LexiconTokenizer {
            lexicon,
            max_word_chars,
        }
    }

    /// Resolve one kanji/katakana run. At each position the longest
    /// lexicon word wins; characters no word starts at accumulate into an
    /// unresolved span, flushed as one unknown token.
    fn segment_lexical_run(&self, run: &str, out: &mut Vec<Token>) {
        let chars: Vec<char> = run.chars().collect();
        let mut pending = String::new();
        let mut i = 0;

        while i < chars.len() {
            let upper = self.max_word_chars.min(chars.len() - i);
            let matched = (1..=upper).rev().find(|&len| {
                let candidate: String = chars[i..i + len].iter().collect();
                self.lexicon.contains(candidate.as_str())
            });

            match matched {
                Some(len) => {
                    if !pending.is_empty() {
                        out.push(Token::unknown(std::mem::take(&mut pending)));
                    }
                    out.push(Token::known(chars[i..i + len].iter().collect()));
                    i += len;
                }
                None => {
                    pending.push(chars[i]);
                    i += 1;
                }
            }
        }

        if !pending.is_empty() {
            out.push(Token::unknown(pending));
        }
    }
}

impl Default for LexiconTokenizer {
    fn default() -> Self {
        LexiconTokenizer::new()
    }
}

impl Morphology for LexiconTokenizer {
    fn segment(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (class, run) in class_runs(text) {
            match class {
                CharClass::Kanji | CharClass::Katakana => {
                    self.segment_lexical_run(&run, &mut tokens)
                }
                CharClass::Hiragana | CharClass::Alnum | CharClass::Other => {
                    tokens.push(Token::known(run))
                }
            }
        }

        tokens
    }
}

/// Split text into maximal same-class character runs.
fn class_runs(text: &str) -> Vec<(CharClass, String)> {
    let mut runs: Vec<(CharClass, String)> = Vec::new();

    for ch in text.chars() {
        let class = classify(ch);
        match runs.last_mut() {
            Some((last, run)) if *last == class => run.push(ch),
            _ => runs.push((class, ch.to_string())),
        }
    }

    runs
}

/// Flag the justification tokens the tokenizer cannot resolve.
pub fn detect_unknown_words(morphology: &dyn Morphology, row: &CheckRow) -> Vec<UnknownWord> {
    morphology
        .segment(&row.justification)
        .into_iter()
        .filter(|token| !token.known)
        .map(|token| UnknownWord {
            row_number: row.row_number,
            subject: row.subject().to_string(),
            item_type: row.item_type().to_string(),
            surface: token.surface,
        })
        .collect()
}
