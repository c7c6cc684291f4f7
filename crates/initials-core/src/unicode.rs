//! Character-level helpers for Han code points and pinyin spellings.

/// First code point of the CJK Unified Ideographs block (U+4E00).
pub const CJK_START: u32 = 0x4E00;

/// Number of code points in the frozen block snapshot (U+4E00..=U+9FA5).
///
/// Later Unicode revisions extended the block; the table keeps the bounds
/// it was first generated with.
pub const CJK_COUNT: u32 = 20902;

/// Check the frozen CJK Unified Ideographs snapshot (U+4E00..=U+9FA5).
pub fn is_cjk_unified(c: char) -> bool {
    (CJK_START..CJK_START + CJK_COUNT).contains(&(c as u32))
}

/// Fold a pinyin letter carrying a tone mark or diaeresis to its ASCII base.
///
/// Characters outside the pinyin alphabet are returned unchanged.
pub fn fold_diacritic(c: char) -> char {
    match c {
        'ā' | 'á' | 'ǎ' | 'à' | 'Ā' | 'Á' | 'Ǎ' | 'À' => 'a',
        'ē' | 'é' | 'ě' | 'è' | 'ê' | 'Ē' | 'É' | 'Ě' | 'È' | 'Ê' => 'e',
        'ī' | 'í' | 'ǐ' | 'ì' | 'Ī' | 'Í' | 'Ǐ' | 'Ì' => 'i',
        'ō' | 'ó' | 'ǒ' | 'ò' | 'Ō' | 'Ó' | 'Ǒ' | 'Ò' => 'o',
        'ū' | 'ú' | 'ǔ' | 'ù' | 'ü' | 'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' | 'Ū' | 'Ú' | 'Ǔ' | 'Ù' | 'Ü' => 'u',
        'ḿ' | 'Ḿ' => 'm',
        'ń' | 'ň' | 'ǹ' | 'Ń' | 'Ň' | 'Ǹ' => 'n',
        _ => c,
    }
}
