//! File name normalization: Cyrillic to Latin, then anything that is not a
//! word character becomes `_`. Only the stem is rewritten; the extension is
//! kept verbatim.

const CYRILLIC: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюяєіїґ";
const LATIN: [&str; 37] = [
    "a", "b", "v", "g", "d", "e", "e", "zh", "z", "i", "y", "k", "l", "m", "n", "o", "p", "r", "s",
    "t", "u", "f", "h", "ts", "ch", "sh", "sch", "", "y", "", "e", "yu", "ya", "ye", "i", "yi", "g",
];

fn transliterate_char(c: char, out: &mut String) -> bool {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let Some(pos) = CYRILLIC.chars().position(|k| k == lower) else {
        return false;
    };
    let latin = LATIN[pos];
    if c != lower {
        out.push_str(&latin.to_uppercase());
    } else {
        out.push_str(latin);
    }
    true
}

/// Transliterates Cyrillic letters; an upper-case letter maps to upper-case Latin.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if !transliterate_char(c, &mut out) {
            out.push(c);
        }
    }
    out
}

/// Normalizes a file name such as `"Звіт 2024 (копія).pdf"` into
/// `"Zvit_2024__kopiya_.pdf"`.
pub fn normalize(file_name: &str) -> String {
    let (stem, ext) = match file_name.rfind('.') {
        Some(dot) => (&file_name[..dot], Some(&file_name[dot + 1..])),
        None => (file_name, None),
    };
    let cleaned: String = transliterate(stem)
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    match ext {
        Some(ext) => format!("{}.{}", cleaned, ext),
        None => cleaned,
    }
}
